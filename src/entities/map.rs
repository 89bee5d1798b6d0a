use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Place};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub title: String,
    pub subtitle: Option<String>,
    pub coordinates: Coordinates,
    pub image_data: Option<Vec<u8>>,
}

impl Annotation {
    pub fn for_place(place: &Place, coordinates: Coordinates) -> Self {
        Self {
            title: place.name.clone(),
            subtitle: place.kind.clone(),
            coordinates,
            image_data: place.image_data.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinates,
    pub latitudinal_meters: f64,
    pub longitudinal_meters: f64,
}

impl Region {
    pub fn square(center: Coordinates, meters: f64) -> Self {
        Self {
            center,
            latitudinal_meters: meters,
            longitudinal_meters: meters,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl BoundingBox {
    pub fn enclosing(points: &[Coordinates]) -> Option<Self> {
        let first = points.first()?;
        let (mut south_west, mut north_east) = (*first, *first);

        for point in &points[1..] {
            south_west.lat = south_west.lat.min(point.lat);
            south_west.lng = south_west.lng.min(point.lng);
            north_east.lat = north_east.lat.max(point.lat);
            north_east.lng = north_east.lng.max(point.lng);
        }

        Some(Self {
            south_west,
            north_east,
        })
    }
}

/// Commands for whatever renders the map. The core never draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum MapCommand {
    ShowAnnotations { annotations: Vec<Annotation> },
    SelectAnnotation { annotation: Annotation },
    ShowUserLocation { enabled: bool },
    SetRegion { region: Region },
    SetVisibleRect { bounds: BoundingBox },
    AddOverlay { generation: u64, polyline: Vec<Coordinates> },
    RemoveOverlays,
}

#[test]
fn bounding_box_encloses_points() {
    let points = [
        Coordinates::new(50.45, 30.52),
        Coordinates::new(50.40, 30.60),
        Coordinates::new(50.47, 30.50),
    ];

    let bounds = BoundingBox::enclosing(&points).unwrap();
    assert_eq!(bounds.south_west, Coordinates::new(50.40, 30.50));
    assert_eq!(bounds.north_east, Coordinates::new(50.47, 30.60));

    assert!(BoundingBox::enclosing(&[]).is_none());
}
