/// Format money as won with thousands separators: `₩1,234`.
pub fn format_money(amount: u64) -> String {
    format!("₩{}", format_with_commas(amount))
}

/// Format an hour of the day as `HH:00`.
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
