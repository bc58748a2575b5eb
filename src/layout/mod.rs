pub(crate) mod partition;
pub(crate) mod regions;
pub(crate) mod table;
