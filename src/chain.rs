//! Chain display priorities.
//!
//! Higher priority sorts first. The table is fixed; chains not listed get
//! [`UNKNOWN_CHAIN_PRIORITY`], which doubles as the filter threshold in the
//! pipeline — a balance on an unrecognized chain is never displayed.

/// Priority assigned to any chain not in the table. Also the exclusion
/// threshold: the pipeline keeps a balance only when its priority is
/// strictly greater than this value.
pub const UNKNOWN_CHAIN_PRIORITY: i32 = -99;

/// Fixed chain -> priority table. Zilliqa and Neo intentionally share a rank.
const CHAIN_PRIORITIES: [(&str, i32); 5] = [
    ("Osmosis", 100),
    ("Ethereum", 50),
    ("Arbitrum", 30),
    ("Zilliqa", 20),
    ("Neo", 20),
];

/// Display priority for a chain identifier.
///
/// Never fails: unrecognized chains get the sentinel instead of an error.
pub fn priority_of(chain: &str) -> i32 {
    CHAIN_PRIORITIES
        .iter()
        .find(|(name, _)| *name == chain)
        .map(|(_, priority)| *priority)
        .unwrap_or(UNKNOWN_CHAIN_PRIORITY)
}
