pub mod generate_ad;
pub mod target_description;
