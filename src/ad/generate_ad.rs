use rand::seq::SliceRandom;
use rand::Rng;

use crate::ad::target_description::get_target_description;
use crate::extract_data::ProductRecord;

const PRICE_FALLBACK: &str = "a great price";

/// The five ad sentences for a product, in a fixed order.
pub fn ad_templates(product: &ProductRecord) -> [String; 5] {
    let name = &product.product_name;
    let price = product.product_price.as_deref().unwrap_or(PRICE_FALLBACK);
    let rating_text = product
        .product_rating
        .as_deref()
        .map(|rating| format!(" Rated {} stars!", rating))
        .unwrap_or_default();

    [
        format!("Discover {}! {} Available now at {}.", name, rating_text, price),
        format!("Introducing the amazing {} - perfect for you! {}", name, rating_text),
        format!("Don't miss out on {}! Get yours at {}.", name, price),
        format!("Experience the excellence of {}! {}", name, rating_text),
        format!("Transform your life with {}! Now only {}!", name, price),
    ]
}

/// Picks one template uniformly at random and appends the audience sentence
/// on its own line when the (gender, age group) pair has one.
pub fn generate_ad(product: &ProductRecord, gender: &str, age_group: &str) -> String {
    generate_ad_with_rng(product, gender, age_group, &mut rand::thread_rng())
}

pub fn generate_ad_with_rng<R: Rng + ?Sized>(
    product: &ProductRecord,
    gender: &str,
    age_group: &str,
    rng: &mut R,
) -> String {
    let target_description = get_target_description(gender, age_group);

    let mut ad = ad_templates(product)
        .choose(rng)
        .cloned()
        .unwrap_or_default();

    if !target_description.is_empty() {
        ad.push('\n');
        ad.push_str(target_description);
    }

    ad
}
