//! Wall-clock reads and unique id minting for storefront records.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static ID_MINT: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Mints a unique id for a storefront record.
///
/// Ids are millisecond timestamps bumped past the previous mint, so cart
/// lines and reviews created within the same millisecond stay distinct and
/// sort in creation order. Uniqueness holds per thread, which covers the
/// single-threaded browser runtime.
pub fn mint_record_id() -> u64 {
    ID_MINT.with(|mint| {
        let next = unix_time_ms_now().max(mint.get() + 1);
        mint.set(next);
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_strictly_increase() {
        let before = unix_time_ms_now();
        let a = mint_record_id();
        let b = mint_record_id();
        let c = mint_record_id();
        assert!(before <= a);
        assert!(a < b && b < c);
    }
}
