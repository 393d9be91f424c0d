pub const OTHERS_DESCRIPTION: &str = "The ad should emphasize inclusivity, comfort, and a sense of belonging, appealing to individuals of diverse identities who value style and self-expression across all age groups.";

/// Audience sentence for a (gender, age group) pair.
///
/// `others` gets one universal sentence whatever the age group. Any pair
/// missing from the table yields an empty string.
pub fn get_target_description(gender: &str, age_group: &str) -> &'static str {
    match (gender, age_group) {
        ("others", _) => OTHERS_DESCRIPTION,

        ("female", "9-18") => "The ad should appeal to young girls with a focus on fun, color, and trendy designs.",
        ("female", "18-25") => "The ad should emphasize style, comfort, and empowerment, as young women in this age group often look for products that complement their personal style and lifestyle.",
        ("female", "25-40") => "For women in this age group, the ad should focus on a balance of comfort, elegance, and professional appeal.",
        ("female", "40-60") => "The ad should emphasize comfort, sophistication, and practicality, appealing to women who value quality and timeless style.",
        ("female", "60+") => "The ad should highlight comfort, elegance, and the products ability to bring relaxation and ease to daily life.",

        ("male", "9-18") => "The ad should appeal to young boys or teens, focusing on energy, coolness, and modern trends.",
        ("male", "18-25") => "The ad should focus on style, confidence, and boldness, appealing to young men who are exploring their identity and fashion preferences.",
        ("male", "25-40") => "For men in this age group, the ad should emphasize practicality, style, and versatility.",
        ("male", "40-60") => "The ad should appeal to men with a focus on quality, durability, and classic style, suitable for both personal and professional settings.",
        ("male", "60+") => "The ad should highlight comfort, ease of use, and thoughtful gifts for loved ones.",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGE_GROUPS: [&str; 5] = ["9-18", "18-25", "25-40", "40-60", "60+"];

    #[test]
    fn every_known_pair_has_a_sentence() {
        for gender in ["male", "female"] {
            for age_group in AGE_GROUPS {
                assert!(
                    !get_target_description(gender, age_group).is_empty(),
                    "{gender}/{age_group}"
                );
            }
        }
    }

    #[test]
    fn others_ignores_age_group() {
        for age_group in AGE_GROUPS.iter().chain(&["", "unknown"]) {
            assert_eq!(get_target_description("others", age_group), OTHERS_DESCRIPTION);
        }
    }

    #[test]
    fn unknown_pairs_are_empty() {
        assert_eq!(get_target_description("male", "100+"), "");
        assert_eq!(get_target_description("robot", "18-25"), "");
        assert_eq!(get_target_description("Male", "18-25"), "");
        assert_eq!(get_target_description("", ""), "");
    }
}
