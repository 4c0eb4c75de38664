use elite_profiler::{StopWordSet, Tokenizer};

#[cfg(test)]
mod post_tokenizer_tests {
    use super::*;

    #[test]
    fn test_extracts_mentions_hashtags_and_words() {
        let stop_words = StopWordSet::from_list(&["the"]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("Hi @bob check #cool https://x.co the the 2 cats");

        assert_eq!(tokenized.words, vec!["hi", "check", "cats"]);
        assert_eq!(tokenized.mentions, vec!["@bob"]);
        assert_eq!(tokenized.hashtags, vec!["#cool"]);
        assert_eq!(tokenized.urls, vec!["https://x.co"]);
    }

    #[test]
    fn test_shared_stop_words() {
        let tokenizer = Tokenizer::post_parser();

        let tokenized = tokenizer.extract("Hi @bob check #cool https://x.co the the 2 cats");

        assert_eq!(tokenized.words, vec!["hi", "check", "cats"]);
        assert_eq!(tokenized.mentions, vec!["@bob"]);
        assert_eq!(tokenized.hashtags, vec!["#cool"]);
    }

    #[test]
    fn test_lone_numbers_and_embedded_digits() {
        let stop_words = StopWordSet::from_list(&[]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized =
            tokenizer.extract("Vote 2020 today, 100% of us! Covid19 #Vote2020 @Gov_Smith");

        assert_eq!(tokenized.words, vec!["vote", "today", "of", "us", "covid"]);
        assert_eq!(tokenized.mentions, vec!["@Gov_Smith"]);
        assert_eq!(tokenized.hashtags, vec!["#Vote2020"]);
    }

    #[test]
    fn test_first_pass_is_case_sensitive() {
        let stop_words = StopWordSet::from_list(&["the", "and"]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("The cats and THE dogs");

        // Capitalized stop words survive the first pass but not the second
        assert_eq!(tokenized.words, vec!["cats", "dogs"]);
    }

    #[test]
    fn test_second_pass_catches_stop_words_glued_to_digits() {
        let stop_words = StopWordSet::from_list(&["the"]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("the2 cats");

        assert_eq!(tokenized.words, vec!["cats"]);
    }

    #[test]
    fn test_lone_sigils_are_dropped() {
        let stop_words = StopWordSet::from_list(&[]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("@ # hello @x");

        assert_eq!(tokenized.mentions, vec!["@x"]);
        assert!(tokenized.hashtags.is_empty());
        assert_eq!(tokenized.words, vec!["hello"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let stop_words = StopWordSet::from_list(&[]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("rock&roll e-mail (Senate)...");

        assert_eq!(tokenized.words, vec!["rock", "roll", "mail", "senate"]);
    }

    #[test]
    fn test_only_https_tokens_are_set_aside() {
        let stop_words = StopWordSet::from_list(&[]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("see https://t.co/abc and http://old.com");

        assert_eq!(tokenized.urls, vec!["https://t.co/abc"]);
        assert_eq!(tokenized.words, vec!["see", "and", "http", "old", "com"]);
    }

    #[test]
    fn test_mentions_keep_case_and_words_are_lowercased() {
        let stop_words = StopWordSet::from_list(&[]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("Thanks @JoeBiden for VISITING");

        assert_eq!(tokenized.mentions, vec!["@JoeBiden"]);
        assert_eq!(tokenized.words, vec!["thanks", "for", "visiting"]);
    }

    #[test]
    fn test_inner_sigils_stay_in_content_words() {
        let stop_words = StopWordSet::from_list(&[]);
        let tokenizer = Tokenizer::with_stop_words(&stop_words);

        let tokenized = tokenizer.extract("write press@senate.gov");

        assert!(tokenized.mentions.is_empty());
        assert_eq!(tokenized.words, vec!["write", "press@senate", "gov"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokenizer = Tokenizer::post_parser();

        let tokenized = tokenizer.extract("");

        assert!(tokenized.words.is_empty());
        assert!(tokenized.mentions.is_empty());
        assert!(tokenized.hashtags.is_empty());
        assert!(tokenized.urls.is_empty());
    }

    #[test]
    fn test_noise_fragments_are_removed() {
        let tokenizer = Tokenizer::post_parser();

        let tokenized = tokenizer.extract("Jobs &amp; wages");

        assert_eq!(tokenized.words, vec!["jobs", "wages"]);
    }
}
