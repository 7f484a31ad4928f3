pub mod calendar;
pub mod selection;
pub mod table;
pub mod trip;
