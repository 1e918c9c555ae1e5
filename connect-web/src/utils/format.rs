//! Display formatting for addresses and chains

use crate::utils::constants::chain_name;
use lib_web3::format_quantity;

/// Format an address by showing the first `prefix_len` and last `suffix_len`
/// characters. Addresses too short to truncate meaningfully are returned
/// as-is. Byte indexing is safe: 0x-hex addresses are ASCII.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = address.len();
    if len <= prefix_len + suffix_len || prefix_len >= len || suffix_len >= len {
        return address.to_string();
    }
    format!("{}...{}", &address[..prefix_len], &address[len - suffix_len..])
}

/// Default truncation for 0x-addresses: `0x1234...abcd`.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Human-readable chain label: known name plus hex id, or the hex id alone.
pub fn chain_label(id: u64) -> String {
    match chain_name(id) {
        Some(name) => format!("{} ({})", name, format_quantity(id)),
        None => format!("chain {}", format_quantity(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
        assert_eq!(format_address(addr, 6, 4), "0xfB69...d359");
        assert_eq!(format_address(addr, 10, 8), "0xfB691609...37c5d359");
    }

    #[test]
    fn test_format_address_short_input() {
        assert_eq!(format_address("0xabc", 6, 4), "0xabc");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
        assert_eq!(truncate_address(addr), "0xfB69...d359");
    }

    #[test]
    fn test_chain_label() {
        assert_eq!(chain_label(1), "Ethereum Mainnet (0x1)");
        assert_eq!(chain_label(999_999), "chain 0xf423f");
    }
}
