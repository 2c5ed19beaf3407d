// Table definitions for the market data schema.
// Kept in sync with the SQL migrations owned by the deployment repo; the
// actual schema name is resolved at runtime (see naming derivation) via
// search_path, so tables are unqualified here.

diesel::table! {
    symbols (symbol_id) {
        symbol_id -> Varchar,
        symbol -> Varchar,
        base_currency -> Varchar,
        quote_currency -> Varchar,
        display_name -> Nullable<Varchar>,
        is_active -> Bool,
        min_price_movement -> Nullable<Numeric>,
        min_order_size -> Nullable<Numeric>,
        max_order_size -> Nullable<Numeric>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        metadata -> Nullable<Jsonb>,
    }
}

diesel::table! {
    price_feeds (feed_id) {
        feed_id -> Varchar,
        symbol -> Varchar,
        price -> Numeric,
        bid -> Nullable<Numeric>,
        ask -> Nullable<Numeric>,
        volume_24h -> Nullable<Numeric>,
        source -> Varchar,
        timestamp -> Timestamptz,
        metadata -> Nullable<Jsonb>,
    }
}

diesel::table! {
    candles (candle_id) {
        candle_id -> Varchar,
        symbol -> Varchar,
        interval -> Varchar,
        open -> Numeric,
        high -> Numeric,
        low -> Numeric,
        close -> Numeric,
        volume -> Numeric,
        start_time -> Timestamptz,
        end_time -> Timestamptz,
        num_trades -> Nullable<Int4>,
        metadata -> Nullable<Jsonb>,
    }
}

diesel::table! {
    market_snapshots (snapshot_id) {
        snapshot_id -> Varchar,
        symbol -> Varchar,
        last_price -> Numeric,
        bid -> Nullable<Numeric>,
        ask -> Nullable<Numeric>,
        spread -> Nullable<Numeric>,
        volume_24h -> Nullable<Numeric>,
        price_change_24h -> Nullable<Numeric>,
        price_change_percent_24h -> Nullable<Numeric>,
        timestamp -> Timestamptz,
        metadata -> Nullable<Jsonb>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(symbols, price_feeds, candles, market_snapshots,);
