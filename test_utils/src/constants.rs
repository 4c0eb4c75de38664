/// Header row of every fixture table, in the column order `PostRow` writes.
pub const INPUT_HEADERS: [&str; 9] = [
    "text",
    "elite",
    "retweet_count",
    "media",
    "gender",
    "dw_score",
    "race",
    "age",
    "followers",
];

pub const LIBERAL_SCORE: f64 = -0.42;
pub const CONSERVATIVE_SCORE: f64 = 0.58;
