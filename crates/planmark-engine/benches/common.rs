// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_plan_content(days: usize) -> String {
    let mut content = String::from("# Trip plan\n\nA **relaxed** itinerary with `local` transport.\n\n---\n\n");

    for day in 1..=days {
        content.push_str(&format!("## Day {day}\n\n"));
        content.push_str("- **Morning**: visit the *old town*\n");
        content.push_str("- **Afternoon**: lunch at [the market](https://example.com/market)\n");
        content.push_str("- **Evening**: walk along the river\n\n");
        content.push_str("> Budget tip: buy a day pass at the station.\n\n");
        content.push_str("Travel time is about `40 min` between stops, see _notes_ below.\n\n");
    }

    content.push_str("```json\n{\"days\": ");
    content.push_str(&days.to_string());
    content.push_str(", \"currency\": \"EUR\"}\n```\n");
    content
}

/// A single long paragraph dense with inline markers.
#[allow(dead_code)]
pub fn generate_inline_heavy(repeats: usize) -> String {
    "plain **bold** and *italic* with `code` and [a](b) then a * stray ".repeat(repeats)
}
