use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub coordinates: Coordinates,
    pub formatted_address: Option<String>,
    pub thoroughfare: Option<String>,
    pub sub_thoroughfare: Option<String>,
}

impl Placemark {
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            formatted_address: None,
            thoroughfare: None,
            sub_thoroughfare: None,
        }
    }

    /// "street, building" when both are known.
    pub fn address_line(&self) -> Option<String> {
        match (&self.thoroughfare, &self.sub_thoroughfare) {
            (Some(street), Some(building)) => Some(format!("{}, {}", street, building)),
            (Some(street), None) => Some(street.clone()),
            _ => self.formatted_address.clone(),
        }
    }
}

#[test]
fn address_line_preference() {
    let mut placemark = Placemark::at(crate::entities::Coordinates::new(0.0, 0.0));
    assert_eq!(placemark.address_line(), None);

    placemark.formatted_address = Some("Khreshchatyk St, 22, Kyiv".into());
    assert_eq!(placemark.address_line().as_deref(), Some("Khreshchatyk St, 22, Kyiv"));

    placemark.thoroughfare = Some("Khreshchatyk St".into());
    assert_eq!(placemark.address_line().as_deref(), Some("Khreshchatyk St"));

    placemark.sub_thoroughfare = Some("22".into());
    assert_eq!(placemark.address_line().as_deref(), Some("Khreshchatyk St, 22"));
}
