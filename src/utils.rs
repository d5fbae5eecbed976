// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 12 {
        return address.to_string();
    }

    let start = &address[..6];
    let end = &address[address.len() - 4..];

    format!("{}...{}", start, end)
}
