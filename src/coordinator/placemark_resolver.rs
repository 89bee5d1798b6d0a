use async_channel::Sender;

use crate::{
    coordinator::{Completion, InFlight},
    entities::Coordinates,
    error::{geocode_failed_error, geocode_no_match_error, Error},
    external::{DynGeocoder, Geocoder},
};

/// Resolves an address to coordinates. A missing or blank address is not an
/// error and never reaches the geocoder.
#[tracing::instrument(skip(geocoder))]
pub async fn resolve<G>(geocoder: &G, address: Option<&str>) -> Result<Option<Coordinates>, Error>
where
    G: Geocoder + ?Sized,
{
    let address = match address.map(str::trim).filter(|a| !a.is_empty()) {
        Some(address) => address,
        None => return Ok(None),
    };

    let placemarks = geocoder.geocode(address).await.map_err(|err| {
        tracing::warn!("geocoding {:?} failed: {}", address, err);
        geocode_failed_error()
    })?;

    let placemark = placemarks
        .into_iter()
        .next()
        .ok_or_else(geocode_no_match_error)?;

    Ok(Some(placemark.coordinates))
}

#[tracing::instrument(skip(geocoder))]
pub async fn reverse_address<G>(
    geocoder: &G,
    coordinates: Coordinates,
) -> Result<Option<String>, Error>
where
    G: Geocoder + ?Sized,
{
    let placemarks = geocoder.reverse_geocode(coordinates).await.map_err(|err| {
        tracing::warn!("reverse geocoding {:?} failed: {}", coordinates, err);
        geocode_failed_error()
    })?;

    let placemark = placemarks
        .into_iter()
        .next()
        .ok_or_else(geocode_no_match_error)?;

    Ok(placemark.address_line())
}

/// Session-scoped resolver: one outstanding request per direction.
pub struct PlacemarkResolver {
    geocoder: DynGeocoder,
    forward: InFlight,
    reverse: InFlight,
}

impl PlacemarkResolver {
    pub fn new(geocoder: DynGeocoder) -> Self {
        Self {
            geocoder,
            forward: InFlight::new(),
            reverse: InFlight::new(),
        }
    }

    /// Returns the generation of the started request, or `None` when there
    /// was nothing to resolve.
    pub fn start_resolve(
        &mut self,
        address: Option<&str>,
        completions: &Sender<Completion>,
    ) -> Option<u64> {
        let address = address.map(str::trim).filter(|a| !a.is_empty())?.to_string();

        let generation = self.forward.begin();
        let geocoder = self.geocoder.clone();
        let completions = completions.clone();

        self.forward.attach(tokio::spawn(async move {
            let result = resolve(&*geocoder, Some(&address)).await;
            let _ = completions
                .send(Completion::Geocoded { generation, result })
                .await;
        }));

        Some(generation)
    }

    pub fn start_reverse(
        &mut self,
        coordinates: Coordinates,
        completions: &Sender<Completion>,
    ) -> u64 {
        let generation = self.reverse.begin();
        let geocoder = self.geocoder.clone();
        let completions = completions.clone();

        self.reverse.attach(tokio::spawn(async move {
            let result = reverse_address(&*geocoder, coordinates).await;
            let _ = completions
                .send(Completion::ReverseGeocoded { generation, result })
                .await;
        }));

        generation
    }

    pub fn accept_forward(&mut self, generation: u64) -> bool {
        self.forward.settle(generation)
    }

    pub fn accept_reverse(&mut self, generation: u64) -> bool {
        self.reverse.settle(generation)
    }

    pub fn cancel(&mut self) {
        self.forward.cancel();
        self.reverse.cancel();
    }
}
