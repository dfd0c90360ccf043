pub mod ask;
pub mod frame;
pub mod menu;
pub mod pause;
pub mod table;
