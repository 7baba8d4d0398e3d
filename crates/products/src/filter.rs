//! Catalog search and filters.

use livraria_core::CategoryId;

use crate::product::Product;

/// Catalog view filter. `None` fields mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<CategoryId>,
    pub product_type: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self
                .category
                .is_none_or(|wanted| product.category_id() == Some(wanted))
            && self
                .product_type
                .as_deref()
                .is_none_or(|wanted| product.product_type.as_deref() == Some(wanted))
    }

    /// Products passing the filter, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    // Text fields match case-insensitively; ISBN is compared as typed.
    fn matches_search(&self, product: &Product) -> bool {
        let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let term_lower = term.to_lowercase();
        let contains = |field: Option<&str>| {
            field.is_some_and(|f| f.to_lowercase().contains(&term_lower))
        };

        contains(Some(&product.name))
            || contains(product.sku.as_deref())
            || contains(product.product_type.as_deref())
            || product.author_names().to_lowercase().contains(&term_lower)
            || contains(product.publisher.as_deref())
            || product.isbn.as_deref().is_some_and(|isbn| isbn.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductAuthor, ProductCategory};
    use livraria_core::{AuthorId, ProductId};

    fn product(id: i64, name: &str, category: i64, product_type: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            sku: Some(format!("SKU-{id}")),
            product_type: Some(product_type.to_string()),
            price: 10.0,
            price_with_percent: 10.0,
            unit: None,
            stock_qty: 1,
            min_qty: 0,
            max_qty: None,
            publisher: Some("Companhia das Letras".to_string()),
            isbn: Some(format!("97800{id}")),
            category: Some(ProductCategory {
                id: CategoryId::new(category),
                name: "Cat".to_string(),
                size: None,
                packaging_type: None,
                default_adjustment_percent: 0.0,
            }),
            authors: vec![ProductAuthor {
                id: AuthorId::new(id),
                full_name: format!("Autor {name}"),
                nationality: None,
                birth_date: None,
                biography: None,
                product_count: 1,
            }],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Memórias Póstumas", 1, "Livro"),
            product(2, "Caderno Pautado", 2, "Papelaria"),
            product(3, "Iracema", 1, "Livro"),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let products = catalog();
        assert_eq!(ProductFilter::default().apply(&products).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_on_names_and_authors() {
        let products = catalog();
        let filter = ProductFilter {
            search: Some("IRACEMA".into()),
            ..Default::default()
        };
        let hits = filter.apply(&products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new(3));

        let by_author = ProductFilter {
            search: Some("autor caderno".into()),
            ..Default::default()
        };
        assert_eq!(by_author.apply(&products)[0].id, ProductId::new(2));
    }

    #[test]
    fn search_matches_isbn_and_publisher() {
        let products = catalog();
        let isbn = ProductFilter {
            search: Some("978002".into()),
            ..Default::default()
        };
        assert_eq!(isbn.apply(&products).len(), 1);

        let publisher = ProductFilter {
            search: Some("companhia".into()),
            ..Default::default()
        };
        assert_eq!(publisher.apply(&products).len(), 3);
    }

    #[test]
    fn category_and_type_filters_combine() {
        let products = catalog();
        let filter = ProductFilter {
            search: None,
            category: Some(CategoryId::new(1)),
            product_type: Some("Livro".into()),
        };
        let ids: Vec<_> = filter.apply(&products).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(3)]);

        let none = ProductFilter {
            category: Some(CategoryId::new(2)),
            product_type: Some("Livro".into()),
            ..Default::default()
        };
        assert!(none.apply(&products).is_empty());
    }
}
