//! Tests for line trimming, key/value splitting and numeric tokenization

mod tokenizer_tests;

/// Sample lines covering the whitespace and terminator variations seen in real files
pub fn sample_raw_lines() -> Vec<&'static str> {
    vec![
        "",
        " ",
        "   ",
        "\n",
        "\r\n",
        "length:100",
        "length:100\n",
        "  length : 100  \n",
        "\tmonte_carlo_trials:\t50\r\n",
        "temperature: 1.0, 1.5, 2.0",
        "outputfile:out.txt\ntrailing garbage",
        "  no delimiter  ",
        "a",
    ]
}
