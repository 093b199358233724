use serde::{Deserialize, Serialize};

/// Request body sent by create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub id: u32,
    pub name: String,
    pub category: Category,
    #[serde(rename = "photoUrls")]
    pub photo_urls: Vec<String>,
    pub tags: Vec<Tag>,
    pub status: PetStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: CategoryName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryName {
    Dogs,
    Cats,
    Birds,
    Reptiles,
}

impl CategoryName {
    pub const ALL: [CategoryName; 4] = [
        CategoryName::Dogs,
        CategoryName::Cats,
        CategoryName::Birds,
        CategoryName::Reptiles,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape() {
        let payload = Payload {
            id: 7,
            name: "Milo".to_string(),
            category: Category {
                id: 2,
                name: CategoryName::Cats,
            },
            photo_urls: vec!["https://example.com/a.png".to_string()],
            tags: vec![Tag {
                id: 0,
                name: "fluffy".to_string(),
            }],
            status: PetStatus::Pending,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["category"]["name"], "Cats");
        assert_eq!(value["photoUrls"][0], "https://example.com/a.png");
        assert_eq!(value["status"], "pending");
        assert!(value.get("photo_urls").is_none());
    }
}
