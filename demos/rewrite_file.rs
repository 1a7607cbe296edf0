use std::fs::read_to_string;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./tests/resources/tripit_feed.ics".to_owned());
    let buf = read_to_string(path).unwrap();

    print!("{}", travelmoji::rewrite(&buf));
}
