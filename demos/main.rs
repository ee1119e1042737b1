use std::collections::HashMap;

use anyhow::Result;
use check::{
    all, all_key_value_pairs_in, any, are_equal_sorted_slices, try_is_unique_any, unique_slice,
    which_in_map, which_values_in, which_values_in_map, Epsilon, Exact,
};
use tracing::info;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let timer = time::format_description::parse("[hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);
    tracing_subscriber::registry()
        .with(filter::LevelFilter::TRACE)
        .with(tracing_subscriber::fmt::layer().with_timer(timer))
        .init();

    let conditions = [true, false, false];
    info!(any = any(&conditions), all = all(&conditions), "Conditions");

    let (keys, found) = which_in_map(&HashMap::from([(1, true), (2, false)]));
    info!(?keys, found, "True keys");

    let users = HashMap::from([("1", "a"), ("2", "b")]);
    let registry = HashMap::from([("1", "a"), ("3", "c"), ("2", "b")]);
    info!(
        contained = all_key_value_pairs_in(&users, &registry, Exact),
        "Key-value pairs"
    );

    let (indices, found) = which_values_in(&[10, 20], &[10, 10, 50], Exact);
    info!(?indices, found, "Value positions");

    // Near-equal floats stay separate keys
    let measurements = HashMap::from([(1, 0.01), (2, 0.011)]);
    let (keys, found) = which_values_in_map(&[0.01002, 0.01, 0.2], &measurements, Epsilon(0.0001));
    info!(?keys, found, "Float lookup");

    info!(
        equal = are_equal_sorted_slices(&[2, 1], &[1, 2], Exact),
        unique = ?unique_slice(&[3, 1, 3, 2], Exact),
        "Slices"
    );

    info!(unique = try_is_unique_any(&vec![0.5, 0.25])?, "Dynamic check");
    if let Err(err) = try_is_unique_any(&vec![true, true]) {
        info!(%err, "Rejected");
    }

    Ok(())
}
