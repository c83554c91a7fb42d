use betfair_rest::dto::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, to_value};

#[test]
fn test_empty_query_serializes_to_empty_object() {
    assert_eq!(to_value(Query::default()).unwrap(), json!({}));
}

#[test]
fn test_query_serialization_uses_api_names() {
    let query = Query {
        filter: Some(MarketFilter {
            event_ids: Some(vec!["27327279".to_string()]),
            in_play_only: Some(false),
            market_start_time: Some(TimeRange {
                from: Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()),
                to: None,
            }),
            ..Default::default()
        }),
        max_results: Some(1000),
        market_projection: Some(vec![
            MarketProjection::Competition,
            MarketProjection::RunnerDescription,
        ]),
        sort: Some(MarketSort::FirstToStart),
        locale: Some("en".to_string()),
        price_projection: Some(PriceProjection {
            price_data: Some(vec![PriceData::ExBestOffers, PriceData::SpAvailable]),
            ex_best_offers_overrides: Some(ExBestOffersOverrides {
                best_prices_depth: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(
        to_value(&query).unwrap(),
        json!({
            "filter": {
                "eventIds": ["27327279"],
                "inPlayOnly": false,
                "marketStartTime": {"from": "2024-03-02T00:00:00Z"}
            },
            "maxResults": 1000,
            "marketProjection": ["COMPETITION", "RUNNER_DESCRIPTION"],
            "sort": "FIRST_TO_START",
            "locale": "en",
            "priceProjection": {
                "priceData": ["EX_BEST_OFFERS", "SP_AVAILABLE"],
                "exBestOffersOverrides": {"bestPricesDepth": 3}
            }
        })
    );
}

#[test]
fn test_developer_application_deserialization() {
    let apps: Vec<DeveloperApplication> = serde_json::from_value(json!([{
        "appName": "MyApp",
        "appId": 7,
        "appVersions": [{
            "owner": "me",
            "versionId": 11,
            "version": "1.0-DELAY",
            "applicationKey": "K1",
            "delayData": true,
            "subscriptionRequired": false,
            "ownerManaged": true,
            "active": true
        }]
    }]))
    .unwrap();

    assert_eq!(
        apps,
        vec![DeveloperApplication {
            app_name: "MyApp".to_string(),
            app_id: 7,
            app_versions: vec![DeveloperAppVersion {
                owner: "me".to_string(),
                version_id: 11,
                version: "1.0-DELAY".to_string(),
                application_key: "K1".to_string(),
                delayed_data: true,
                subscription_required: false,
                owner_managed: true,
                active: true,
            }],
        }]
    );
}

#[test]
fn test_market_catalogue_deserialization() {
    let catalogue: Vec<MarketCatalogue> = serde_json::from_value(json!([{
        "marketId": "1.116734361",
        "marketName": "Match Odds",
        "marketStartTime": "2024-03-02T15:00:00.000Z",
        "totalMatched": 12345.6,
        "runners": [{
            "selectionId": 47972,
            "runnerName": "Arsenal",
            "handicap": 0.0,
            "sortPriority": 1,
            "metadata": {"runnerId": "47972", "COLOURS_FILENAME": null}
        }],
        "competition": {"id": "10932509", "name": "English Premier League"},
        "event": {"id": "27327279", "name": "Arsenal v Chelsea"}
    }]))
    .unwrap();

    let market = &catalogue[0];
    assert_eq!(market.market_name, "Match Odds");
    assert_eq!(
        market.market_start_time,
        Some(Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap())
    );
    let runners = market.runners.as_ref().unwrap();
    assert_eq!(runners[0].runner_name, "Arsenal");
    assert_eq!(
        market.competition.as_ref().map(|c| c.name.as_str()),
        Some("English Premier League")
    );
}

#[test]
fn test_profit_and_loss_deserialization() {
    let pnl: Vec<MarketProfitAndLoss> = serde_json::from_value(json!([{
        "marketId": "1.1",
        "commissionApplied": 5.0,
        "profitAndLosses": [{"selectionId": 1, "ifWin": 10.5, "ifLose": -2.0}]
    }]))
    .unwrap();

    assert_eq!(pnl[0].profit_and_losses[0].if_win, Some(10.5));
    assert_eq!(pnl[0].profit_and_losses[0].if_place, None);
}

#[test]
fn test_account_details_deserialization() {
    let details: AccountDetailsResponse = serde_json::from_value(json!({
        "currencyCode": "GBP",
        "firstName": "Jane",
        "localeCode": "en",
        "region": "GBR",
        "timezone": "GMT",
        "discountRate": 0.0,
        "pointsBalance": 10,
        "countryCode": "GB"
    }))
    .unwrap();

    assert_eq!(details.currency_code.as_deref(), Some("GBP"));
    assert_eq!(details.last_name, None);
    assert_eq!(details.points_balance, Some(10));
}
