//! Product seed data plus the pure search, filter, and similarity queries the
//! views run over it.

use crate::model::{Category, FilterState, Product, ProductId, SortKey};

/// Maximum entries returned by [`similar_products`].
pub const SIMILAR_LIMIT: usize = 4;

fn product(
    id: u32,
    name: &str,
    price: f64,
    old_price: Option<f64>,
    category: Category,
    badge: Option<&str>,
    image: &str,
    rating: f64,
    review_count: u32,
    colors: &[&str],
    material: &str,
    dimensions: &str,
    in_stock: bool,
    tags: &[&str],
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price,
        old_price,
        category,
        badge: badge.map(str::to_string),
        image: image.to_string(),
        rating,
        review_count,
        colors: colors.iter().map(|c| c.to_string()).collect(),
        material: material.to_string(),
        dimensions: dimensions.to_string(),
        in_stock,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The built-in catalog. Order is the "featured" order used by the default
/// sort; ids are stable and strictly increasing with recency.
pub fn seed_products() -> Vec<Product> {
    use Category::*;
    vec![
        product(
            1,
            "Modern Luxe Sofa",
            2799.0,
            Some(3999.0),
            LivingRoom,
            Some("-30%"),
            "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=600",
            4.5,
            128,
            &["Gray", "Beige", "Blue"],
            "Premium velvet",
            "220 x 95 x 85 cm",
            true,
            &["sofa", "living", "modern"],
        ),
        product(
            2,
            "Classic Corner Sofa",
            3499.0,
            Some(4299.0),
            LivingRoom,
            Some("-18%"),
            "https://images.unsplash.com/photo-1493663284031-b7e3aefcae8e?w=600",
            4.7,
            95,
            &["Brown", "Gray"],
            "Natural leather",
            "280 x 180 x 90 cm",
            true,
            &["sofa", "corner", "classic"],
        ),
        product(
            3,
            "3+2+1 Sofa Set",
            4999.0,
            Some(6500.0),
            LivingRoom,
            Some("-23%"),
            "https://images.unsplash.com/photo-1550254478-ead40cc54513?w=600",
            4.8,
            156,
            &["Beige", "Gray", "Green"],
            "Linen blend",
            "Three pieces",
            true,
            &["sofa", "set", "family"],
        ),
        product(
            4,
            "Recliner Chair with Footrest",
            1299.0,
            Some(1699.0),
            Seating,
            Some("New"),
            "https://images.unsplash.com/photo-1567538096630-e0c55bd6374c?w=600",
            4.6,
            73,
            &["Black", "Brown"],
            "Faux leather",
            "85 x 90 x 105 cm",
            true,
            &["chair", "recliner", "comfort"],
        ),
        product(
            5,
            "Premium Oak Dining Table",
            1899.0,
            Some(2299.0),
            DiningRoom,
            Some("New"),
            "https://images.unsplash.com/photo-1617806118233-18e1de247200?w=600",
            5.0,
            95,
            &["Oak", "Walnut"],
            "Solid oak",
            "180 x 90 x 75 cm",
            true,
            &["table", "dining", "wood"],
        ),
        product(
            6,
            "Marble Dining Table with 6 Chairs",
            3299.0,
            Some(4199.0),
            DiningRoom,
            Some("-21%"),
            "https://images.unsplash.com/photo-1615066390971-03e4e1c36ddf?w=600",
            4.9,
            142,
            &["White", "Black"],
            "Marble top, steel legs",
            "200 x 100 x 76 cm",
            true,
            &["table", "dining", "marble", "set"],
        ),
        product(
            7,
            "Contemporary Sideboard",
            2199.0,
            None,
            DiningRoom,
            None,
            "https://images.unsplash.com/photo-1551298370-9d3d53740c72?w=600",
            4.4,
            67,
            &["Walnut", "White"],
            "Engineered wood",
            "160 x 45 x 80 cm",
            true,
            &["storage", "dining", "modern"],
        ),
        product(
            8,
            "Italian Leather Chair",
            1199.0,
            Some(1499.0),
            Seating,
            Some("-20%"),
            "https://images.unsplash.com/photo-1506439773649-6e0eb8cfb237?w=600",
            4.0,
            64,
            &["Tan", "Black"],
            "Italian leather",
            "70 x 75 x 95 cm",
            false,
            &["chair", "leather", "accent"],
        ),
        product(
            9,
            "Wooden Rocking Chair",
            899.0,
            None,
            Seating,
            None,
            "https://images.unsplash.com/photo-1519947486511-46149fa0a254?w=600",
            4.3,
            45,
            &["Natural", "Dark brown"],
            "Beech wood",
            "66 x 90 x 100 cm",
            true,
            &["chair", "rocking", "wood"],
        ),
        product(
            10,
            "Executive Office Chair",
            1599.0,
            Some(1999.0),
            Office,
            Some("-20%"),
            "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?w=600",
            4.7,
            98,
            &["Black", "Gray"],
            "Mesh and faux leather",
            "68 x 68 x 120 cm",
            true,
            &["chair", "office", "ergonomic"],
        ),
        product(
            11,
            "Modern Upholstered Bed",
            3999.0,
            Some(4999.0),
            Bedroom,
            None,
            "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?w=600",
            4.5,
            156,
            &["Gray", "Beige"],
            "Upholstered frame",
            "200 x 180 cm",
            true,
            &["bed", "bedroom", "modern"],
        ),
        product(
            12,
            "Spacious Wardrobe",
            2599.0,
            Some(2999.0),
            Bedroom,
            None,
            "https://images.unsplash.com/photo-1558997519-83ea9252edf8?w=600",
            4.7,
            82,
            &["White", "Oak"],
            "Engineered wood",
            "240 x 60 x 220 cm",
            true,
            &["wardrobe", "storage", "bedroom"],
        ),
        product(
            13,
            "Vanity Table with Mirror",
            1499.0,
            None,
            Bedroom,
            Some("New"),
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=600",
            4.6,
            54,
            &["White", "Pink"],
            "MDF with mirror",
            "100 x 45 x 140 cm",
            true,
            &["vanity", "bedroom", "mirror"],
        ),
        product(
            14,
            "Modern Nightstand",
            599.0,
            None,
            Bedroom,
            None,
            "https://images.unsplash.com/photo-1532372320572-cda25653a26d?w=600",
            4.2,
            38,
            &["Walnut", "Black"],
            "Engineered wood",
            "45 x 40 x 55 cm",
            true,
            &["nightstand", "bedroom", "storage"],
        ),
        product(
            15,
            "Wooden Work Desk",
            1499.0,
            None,
            Office,
            None,
            "https://images.unsplash.com/photo-1518455027359-f3f8164ba6bd?w=600",
            4.2,
            45,
            &["Oak", "White"],
            "Solid pine",
            "140 x 70 x 75 cm",
            true,
            &["desk", "office", "wood"],
        ),
        product(
            16,
            "Corner Desk with Shelves",
            1899.0,
            Some(2299.0),
            Office,
            Some("-17%"),
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=600",
            4.5,
            71,
            &["Walnut", "Black"],
            "Engineered wood and steel",
            "150 x 150 x 75 cm",
            true,
            &["desk", "corner", "office", "storage"],
        ),
        product(
            17,
            "Wooden Bookcase",
            1299.0,
            None,
            Office,
            None,
            "https://images.unsplash.com/photo-1594620302200-9a762244a156?w=600",
            4.4,
            52,
            &["Oak", "White"],
            "Solid wood",
            "90 x 30 x 180 cm",
            false,
            &["bookcase", "storage", "office"],
        ),
        product(
            18,
            "Decorative Wall Mirror",
            499.0,
            None,
            Accessories,
            Some("New"),
            "https://images.unsplash.com/photo-1618220179428-22790b461013?w=600",
            4.3,
            67,
            &["Gold", "Black"],
            "Metal frame",
            "80 cm diameter",
            true,
            &["mirror", "decor", "wall"],
        ),
        product(
            19,
            "3-Piece Coffee Table Set",
            899.0,
            Some(1199.0),
            LivingRoom,
            Some("-25%"),
            "https://images.unsplash.com/photo-1533090481720-856c6e3c1fdc?w=600",
            4.6,
            89,
            &["Walnut", "White"],
            "Wood and tempered glass",
            "Three pieces",
            true,
            &["table", "coffee", "living", "set"],
        ),
        product(
            20,
            "Floating Wall Shelf",
            299.0,
            None,
            Accessories,
            None,
            "https://images.unsplash.com/photo-1600585152220-90363fe7e115?w=600",
            4.1,
            43,
            &["Oak", "White", "Black"],
            "Engineered wood",
            "80 x 20 x 4 cm",
            true,
            &["shelf", "decor", "wall", "storage"],
        ),
    ]
}

/// Lowercases and strips combining diacritics so accented and plain spellings
/// match the same query.
pub fn normalize_search_text(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Products whose name, category label, or tags contain the normalized query.
/// An empty or whitespace query matches nothing.
pub fn search_products<'a>(catalog: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = normalize_search_text(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|product| {
            normalize_search_text(&product.name).contains(&needle)
                || normalize_search_text(product.category.label()).contains(&needle)
                || product
                    .tags
                    .iter()
                    .any(|tag| normalize_search_text(tag).contains(&needle))
        })
        .collect()
}

/// Applies the filter facets and sort key. Sorting is stable, so the default
/// key preserves featured order and ties keep it too.
pub fn apply_filters<'a>(catalog: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    let mut out: Vec<&Product> = catalog
        .iter()
        .filter(|product| {
            filters
                .category
                .map_or(true, |category| product.category == category)
                && product.price <= filters.price_ceiling
                && product.rating >= filters.min_rating
                && (filters.colors.is_empty()
                    || product
                        .colors
                        .iter()
                        .any(|color| filters.colors.contains(color)))
                && (!filters.in_stock_only || product.in_stock)
        })
        .collect();

    match filters.sort {
        SortKey::Default => {}
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        // Byte-wise order, good enough for the ASCII catalog; a locale-aware
        // collation would need icu_collator or similar.
        SortKey::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Newest => out.sort_by(|a, b| b.id.cmp(&a.id)),
    }
    out
}

/// Recommendations for a product page: same-category products first, then
/// products sharing a tag, capped at [`SIMILAR_LIMIT`].
pub fn similar_products<'a>(catalog: &'a [Product], subject: &Product) -> Vec<&'a Product> {
    let mut out: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.id != subject.id && p.category == subject.category)
        .collect();

    if out.len() < SIMILAR_LIMIT {
        for candidate in catalog {
            if candidate.id == subject.id
                || out.iter().any(|p| p.id == candidate.id)
                || !candidate.tags.iter().any(|tag| subject.tags.contains(tag))
            {
                continue;
            }
            out.push(candidate);
            if out.len() == SIMILAR_LIMIT {
                break;
            }
        }
    }

    out.truncate(SIMILAR_LIMIT);
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seed_has_twenty_products_with_unique_ids() {
        let catalog = seed_products();
        assert_eq!(catalog.len(), 20);
        let mut ids: Vec<u32> = catalog.iter().map(|p| p.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn normalization_strips_diacritics() {
        assert_eq!(normalize_search_text("Caf\u{e9}\u{301}"), "caf\u{e9}");
        assert_eq!(normalize_search_text("SOFA"), "sofa");
    }

    #[test]
    fn search_matches_name_category_and_tags() {
        let catalog = seed_products();

        let by_name = search_products(&catalog, "sofa");
        assert!(by_name.iter().any(|p| p.name == "Modern Luxe Sofa"));

        let by_category = search_products(&catalog, "office");
        assert!(by_category.iter().any(|p| p.name == "Executive Office Chair"));

        let by_tag = search_products(&catalog, "ergonomic");
        assert_eq!(by_tag.len(), 1);

        assert!(search_products(&catalog, "   ").is_empty());
    }

    #[test]
    fn filters_compose() {
        let catalog = seed_products();
        let mut filters = FilterState {
            category: Some(Category::Office),
            in_stock_only: true,
            ..FilterState::default()
        };

        let hits = apply_filters(&catalog, &filters);
        assert!(hits.iter().all(|p| p.category == Category::Office && p.in_stock));
        assert!(!hits.iter().any(|p| p.name == "Wooden Bookcase"));

        filters.price_ceiling = 1500.0;
        let cheap = apply_filters(&catalog, &filters);
        assert!(cheap.iter().all(|p| p.price <= 1500.0));
    }

    #[test]
    fn sort_keys_order_results() {
        let catalog = seed_products();
        let mut filters = FilterState::default();

        filters.sort = SortKey::PriceAsc;
        let ascending = apply_filters(&catalog, &filters);
        assert!(ascending.windows(2).all(|w| w[0].price <= w[1].price));

        filters.sort = SortKey::Newest;
        let newest = apply_filters(&catalog, &filters);
        assert_eq!(newest[0].id, ProductId(20));

        filters.sort = SortKey::Default;
        let featured = apply_filters(&catalog, &filters);
        assert_eq!(featured[0].id, ProductId(1));
    }

    #[test]
    fn similar_products_prefer_same_category_then_shared_tags() {
        let catalog = seed_products();
        let mirror = catalog.iter().find(|p| p.id == ProductId(18)).unwrap();

        let similar = similar_products(&catalog, mirror);
        assert!(similar.len() <= SIMILAR_LIMIT);
        assert!(!similar.iter().any(|p| p.id == mirror.id));
        // The only other accessory comes first, then tag matches fill in.
        assert_eq!(similar[0].id, ProductId(20));
    }
}
