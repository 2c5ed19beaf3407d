//! Schema and namespace derivation from service naming conventions
//!
//! Deployments follow a hyphen-delimited naming convention. A singleton
//! deployment uses the same string for service and instance name
//! (`market-data-simulator`); a multi-instance deployment appends an entity
//! suffix to the instance name (`market-data-Coinmetrics`). Both the
//! PostgreSQL schema and the Redis key prefix are derived from those names
//! unless the configuration supplies them explicitly.

/// Derive the PostgreSQL schema name from service and instance names.
///
/// Singleton (`service == instance`): first two hyphen tokens joined by `_`,
/// case preserved. `market-data-simulator` becomes `market_data`.
///
/// Multi-instance: first three tokens of the instance name joined by `_` and
/// lower-cased, so the entity suffix stays a valid schema identifier.
/// `market-data-Coinmetrics` becomes `market_data_coinmetrics`; tokens beyond
/// the third are discarded.
pub fn derive_schema_name(service_name: &str, instance_name: &str) -> String {
    if service_name == instance_name {
        let parts: Vec<&str> = service_name.split('-').collect();
        if parts.len() >= 2 {
            return format!("{}_{}", parts[0], parts[1]);
        }
        return service_name.to_string();
    }

    let parts: Vec<&str> = instance_name.split('-').collect();
    if parts.len() >= 3 {
        format!("{}_{}_{}", parts[0], parts[1], parts[2]).to_lowercase()
    } else if parts.len() >= 2 {
        format!("{}_{}", parts[0], parts[1]).to_lowercase()
    } else {
        instance_name.to_lowercase()
    }
}

/// Derive the Redis key namespace from service and instance names.
///
/// Singleton: same rule as the schema, `market-data-simulator` becomes
/// `market_data`.
///
/// Multi-instance: first two tokens joined by `_`, then `:` and the remaining
/// tokens rejoined with `-`, case preserved so the entity suffix stays
/// readable in key listings. `market-data-Coinmetrics-Pro` becomes
/// `market_data:Coinmetrics-Pro`.
pub fn derive_redis_namespace(service_name: &str, instance_name: &str) -> String {
    if service_name == instance_name {
        let parts: Vec<&str> = service_name.split('-').collect();
        if parts.len() >= 2 {
            return format!("{}_{}", parts[0], parts[1]);
        }
        return service_name.to_string();
    }

    let parts: Vec<&str> = instance_name.split('-').collect();
    if parts.len() >= 2 {
        format!("{}_{}:{}", parts[0], parts[1], parts[2..].join("-"))
    } else {
        instance_name.to_string()
    }
}
