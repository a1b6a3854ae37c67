pub mod ended;
pub mod loading;
pub mod quiz;
