pub mod emotion;
pub mod synthesis;
