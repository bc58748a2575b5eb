use crate::{
    foundation::core::{Axis, Point, Rect},
    foundation::error::{CardslotsError, CardslotsResult},
};

/// Number of card positions along one side of the table.
pub const CARDS_PER_SIDE: usize = 13;

/// Check that `outer` is a finite rectangle with positive extent on both axes.
pub fn validate_outer(outer: Rect) -> CardslotsResult<()> {
    for (name, value) in [
        ("x1", outer.x0),
        ("y1", outer.y0),
        ("x2", outer.x1),
        ("y2", outer.y1),
    ] {
        if !value.is_finite() {
            return Err(CardslotsError::validation(format!(
                "rectangle {name} must be finite, got {value}"
            )));
        }
    }
    if outer.x0 >= outer.x1 {
        return Err(CardslotsError::validation(format!(
            "rectangle x1 ({}) must be < x2 ({})",
            outer.x0, outer.x1
        )));
    }
    if outer.y0 >= outer.y1 {
        return Err(CardslotsError::validation(format!(
            "rectangle y1 ({}) must be < y2 ({})",
            outer.y0, outer.y1
        )));
    }
    Ok(())
}

/// Check that `outer` can be split into `count` strips along `axis` with
/// every strip at least one pixel on both axes.
pub fn validate_split(outer: Rect, axis: Axis, count: usize) -> CardslotsResult<()> {
    validate_outer(outer)?;
    if count == 0 {
        return Err(CardslotsError::validation("slot count must be > 0"));
    }
    let (along, across) = match axis {
        Axis::Horizontal => (outer.width(), outer.height()),
        Axis::Vertical => (outer.height(), outer.width()),
    };
    if along < count as f64 {
        return Err(CardslotsError::validation(format!(
            "rectangle extent {along} along the {axis:?} split is less than {count} px"
        )));
    }
    if across < 1.0 {
        return Err(CardslotsError::validation(format!(
            "rectangle extent {across} across the {axis:?} split is less than 1 px"
        )));
    }
    Ok(())
}

/// Split `outer` into `count` equal strips along `axis`, in index order.
///
/// Strip `i` starts at `near + step * i` and is `step` long, where
/// `step = extent / count`; the other axis is copied from `outer` unchanged.
/// Edges are computed from the index rather than accumulated, so rounding
/// error does not drift across the row.
pub fn partition(outer: Rect, axis: Axis, count: usize) -> CardslotsResult<Vec<Rect>> {
    validate_split(outer, axis, count)?;

    let n = count as f64;
    let (dx, dy, w, h) = match axis {
        Axis::Horizontal => {
            let step = outer.width() / n;
            (step, 0.0, step, outer.height())
        }
        Axis::Vertical => {
            let step = outer.height() / n;
            (0.0, step, outer.width(), step)
        }
    };

    Ok((0..count)
        .map(|i| {
            let i = i as f64;
            let origin = Point::new(outer.x0 + dx * i, outer.y0 + dy * i);
            Rect::from_origin_size(origin, (w, h))
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/partition.rs"]
mod tests;
