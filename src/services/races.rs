//! Wrapper over the backend race endpoints

use std::sync::Arc;

use crate::callback::data::Uf;

use super::http::{ApiError, HttpClient};
use super::models::Race;

/// Optional filters for the available-races listing
#[derive(Debug, Clone, Default)]
pub struct RaceQuery {
    pub uf: Option<Uf>,
    pub min_distance: Option<u32>,
    pub max_distance: Option<u32>,
}

impl RaceQuery {
    pub fn by_uf(uf: Uf) -> Self {
        Self {
            uf: Some(uf),
            ..Default::default()
        }
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(uf) = self.uf {
            params.push(("uf", uf.as_str().to_string()));
        }
        if let Some(min) = self.min_distance {
            params.push(("minDistance", min.to_string()));
        }
        if let Some(max) = self.max_distance {
            params.push(("maxDistance", max.to_string()));
        }
        params
    }
}

pub struct RaceApiService {
    http: Arc<HttpClient>,
}

impl RaceApiService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists races open for discovery, optionally filtered server-side
    pub async fn get_available_races(&self, query: &RaceQuery) -> Result<Vec<Race>, ApiError> {
        let races: Vec<Race> = self
            .http
            .get_with_query("/races/available", &query.to_params())
            .await?;

        log::info!("Retrieved {} available races (query: {:?})", races.len(), query);
        Ok(races)
    }

    /// Fetches a single race; a backend 404 becomes `Ok(None)`
    pub async fn get_race_by_id(&self, id: &str) -> Result<Option<Race>, ApiError> {
        match self.http.get::<Race>(&format!("/races/{}", id)).await {
            Ok(race) => {
                log::info!("Retrieved race {}: {}", id, race.title);
                Ok(Some(race))
            }
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => {
                log::error!("Error getting race by id {}: {}", id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_include_only_set_filters() {
        let query = RaceQuery::by_uf(Uf::Sp);
        assert_eq!(query.to_params(), vec![("uf", "SP".to_string())]);

        let query = RaceQuery {
            uf: Some(Uf::Pr),
            min_distance: Some(5),
            max_distance: Some(9),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("uf", "PR".to_string()),
                ("minDistance", "5".to_string()),
                ("maxDistance", "9".to_string()),
            ]
        );

        assert!(RaceQuery::default().to_params().is_empty());
    }
}
