pub(crate) mod json;
pub(crate) mod plain;
pub(crate) mod regions;
pub(crate) mod table;
