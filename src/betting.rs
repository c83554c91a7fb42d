use crate::dto::{
    CompetitionResult, CountryCodeResult, EventResult, EventTypeResult, MarketBook,
    MarketCatalogue, MarketProfitAndLoss, MarketTypeResult, Query, VenueResult,
};
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::session::Session;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Post-processing hook run on a decoded betting result.
///
/// Visitors get the session, the query that was sent and the decoded rows, and
/// are called in the order given once the response has been decoded.
pub type Visitor<'a, T> = &'a (dyn Fn(&Session, &Query, &[T]) + Send + Sync);

impl Session {
    /// List event types (i.e. Soccer, Tennis)
    pub async fn list_event_types(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, EventTypeResult>],
    ) -> Result<Vec<EventTypeResult>> {
        self.betting_request("listEventTypes", query, visitors).await
    }

    /// List countries with markets matching the filter
    pub async fn list_countries(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, CountryCodeResult>],
    ) -> Result<Vec<CountryCodeResult>> {
        self.betting_request("listCountries", query, visitors).await
    }

    pub async fn list_events(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, EventResult>],
    ) -> Result<Vec<EventResult>> {
        self.betting_request("listEvents", query, visitors).await
    }

    /// List competitions (i.e. World Cup)
    pub async fn list_competitions(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, CompetitionResult>],
    ) -> Result<Vec<CompetitionResult>> {
        self.betting_request("listCompetitions", query, visitors).await
    }

    /// List market types (i.e. MATCH_ODDS, NEXT_GOAL)
    pub async fn list_market_types(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, MarketTypeResult>],
    ) -> Result<Vec<MarketTypeResult>> {
        self.betting_request("listMarketTypes", query, visitors).await
    }

    /// List venues (i.e. Cheltenham, Ascot)
    pub async fn list_venues(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, VenueResult>],
    ) -> Result<Vec<VenueResult>> {
        self.betting_request("listVenues", query, visitors).await
    }

    /// Static information about published (ACTIVE/SUSPENDED) markets
    pub async fn list_market_catalogue(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, MarketCatalogue>],
    ) -> Result<Vec<MarketCatalogue>> {
        self.betting_request("listMarketCatalogue", query, visitors).await
    }

    /// Dynamic prices and state for the requested markets
    pub async fn list_market_book(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, MarketBook>],
    ) -> Result<Vec<MarketBook>> {
        self.betting_request("listMarketBook", query, visitors).await
    }

    pub async fn list_market_profit_and_loss(
        &self,
        query: &Query,
        visitors: &[Visitor<'_, MarketProfitAndLoss>],
    ) -> Result<Vec<MarketProfitAndLoss>> {
        self.betting_request("listMarketProfitAndLoss", query, visitors).await
    }

    async fn betting_request<T>(
        &self,
        method: &str,
        query: &Query,
        visitors: &[Visitor<'_, T>],
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let results: Vec<T> = self.dispatch_json(Endpoint::Betting, method, query).await?;
        debug!(method, rows = results.len(), "betting response decoded");

        for visit in visitors {
            visit(self, query, &results);
        }

        Ok(results)
    }
}
