use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    #[serde(rename = "numReviews")]
    pub num_reviews: u32,
}

/// One page of listing results, replaced wholesale on every query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u32,
    pub pages: u32,
}

/// Seller profile from the user API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub seller: SellerInfo,
}

/// Storefront details nested in a seller's user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerInfo {
    pub name: String,
    pub logo: String,
    pub description: String,
    pub rating: f64,
    #[serde(rename = "numReviews")]
    pub num_reviews: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_page_wire_names() {
        let json = r#"{
            "products": [{
                "_id": "p1",
                "name": "Cotton Shirt",
                "image": "/images/p1.jpg",
                "category": "Shirts",
                "price": 120.5,
                "rating": 4.5,
                "numReviews": 10
            }],
            "page": 2,
            "pages": 5
        }"#;

        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 5);
        assert_eq!(page.products[0].id, "p1");
        assert_eq!(page.products[0].num_reviews, 10);
    }

    #[test]
    fn test_seller_profile_wire_names() {
        let json = r#"{
            "_id": "u7",
            "name": "basir",
            "seller": {
                "name": "Puma Shop",
                "logo": "/images/logo1.png",
                "description": "best seller",
                "rating": 4.5,
                "numReviews": 120
            }
        }"#;

        let profile: SellerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "u7");
        assert_eq!(profile.seller.name, "Puma Shop");
        assert_eq!(profile.seller.num_reviews, 120);
    }
}
