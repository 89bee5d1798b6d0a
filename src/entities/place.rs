use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_RESTAURANT_NAMES: [&str; 15] = [
    "Burger Heroes",
    "Kitchen",
    "Bonsai",
    "Дастархан",
    "Индокитай",
    "X.O",
    "Балкан Гриль",
    "Sherlock Holmes",
    "Speak Easy",
    "Morris Pub",
    "Вкусные истории",
    "Классик",
    "Love&Life",
    "Шок",
    "Бочка",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image_data: Option<Vec<u8>>,
    pub date: DateTime<Utc>,
    pub rating: f64,
}

/// Fields a user fills in on the place form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub name: String,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub rating: f64,
}

impl Place {
    pub fn new(draft: PlaceDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            location: draft.location,
            kind: draft.kind,
            image_data: draft.image_data,
            date: Utc::now(),
            rating: draft.rating,
        }
    }

    /// Editing keeps identity and creation date.
    pub fn apply(&mut self, draft: PlaceDraft) {
        self.name = draft.name;
        self.location = draft.location;
        self.kind = draft.kind;
        self.image_data = draft.image_data;
        self.rating = draft.rating;
    }

    /// The address worth geocoding, if any.
    pub fn address(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }

    pub fn defaults() -> Vec<Place> {
        DEFAULT_RESTAURANT_NAMES
            .iter()
            .map(|name| {
                Place::new(PlaceDraft {
                    name: (*name).into(),
                    location: Some("Kyiv".into()),
                    kind: Some("Caffe".into()),
                    image_data: None,
                    rating: 0.0,
                })
            })
            .collect()
    }
}

impl PlaceDraft {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
