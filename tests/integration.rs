//! Integration tests for the tweet sentiment pipeline

use tweet_sentiment::{
    DataLoader, Evaluator, LabelRecord, LabeledTweet, Sentiment, SentimentClassifier, Tokenizer,
    WordNormalizer,
};

mod tokenization {
    use super::*;

    #[test]
    fn test_whitespace_and_commas_separate_words() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("back to work,again"),
            vec!["back", "to", "work", "again"]
        );
    }

    #[test]
    fn test_emoticons_come_out_whole() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("great day :)"), vec!["great", "day", ":)"]);
        assert_eq!(
            tokenizer.tokenize("so sad=( today"),
            vec!["so", "sad", "=(", "today"]
        );
    }

    #[test]
    fn test_punctuation_runs_kept_lone_marks_dropped() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("wow!!!"), vec!["wow", "!!!"]);
        assert_eq!(tokenizer.tokenize("fine."), vec!["fine"]);
    }
}

mod normalization {
    use super::*;

    #[test]
    fn test_stop_words_drop_but_sentiment_words_stay() {
        let normalizer = WordNormalizer::new();

        assert_eq!(normalizer.normalize("the"), None);
        assert_eq!(normalizer.normalize("was"), None);
        assert_eq!(normalizer.normalize("great"), Some("great".to_string()));
        assert_eq!(normalizer.normalize("no"), Some("no".to_string()));
    }

    #[test]
    fn test_words_reduce_to_lowercase_letters() {
        let normalizer = WordNormalizer::new();

        assert_eq!(normalizer.normalize("LOVED"), Some("loved".to_string()));
        assert_eq!(normalizer.normalize("it's"), Some("its".to_string()));
    }

    #[test]
    fn test_short_symbol_tokens_pass_through() {
        let normalizer = WordNormalizer::new();

        assert_eq!(normalizer.normalize("=D"), Some("=D".to_string()));
        assert_eq!(normalizer.normalize("!!!"), Some("!!!".to_string()));
    }
}

mod training {
    use super::*;

    #[test]
    fn test_weight_ladder() {
        let mut classifier = SentimentClassifier::new();
        classifier.train(&[LabeledTweet::new(
            "1",
            "awesome weather !!!",
            Sentiment::Positive,
        )]);
        let lexicon = classifier.lexicon();

        assert_eq!(lexicon.positive_count("awesome"), 3, "strong word weight");
        assert_eq!(lexicon.positive_count("weather"), 1, "base weight");
        assert_eq!(lexicon.positive_count("!!!"), 2, "punctuation run weight");
    }

    #[test]
    fn test_emoticons_ignore_record_label() {
        let mut classifier = SentimentClassifier::new();
        classifier.train(&[LabeledTweet::new("1", "worst :)", Sentiment::Negative)]);
        let lexicon = classifier.lexicon();

        assert_eq!(lexicon.negative_count("worst"), 3);
        assert_eq!(lexicon.positive_count(":)"), 4, "smile counts positive whatever the label");
        assert_eq!(lexicon.negative_count(":)"), 0);
    }

    #[test]
    fn test_stop_words_never_trained() {
        let mut classifier = SentimentClassifier::new();
        classifier.train(&[LabeledTweet::new("1", "this is the best", Sentiment::Positive)]);
        let lexicon = classifier.lexicon();

        assert_eq!(lexicon.positive_count("this"), 0);
        assert_eq!(lexicon.positive_count("is"), 0);
        assert_eq!(lexicon.positive_count("the"), 0);
        assert_eq!(lexicon.positive_count("best"), 3);
    }
}

mod scoring {
    use super::*;

    #[test]
    fn test_negation_flips_a_learned_word() {
        let mut classifier = SentimentClassifier::new();
        classifier.train(&[LabeledTweet::new("1", "good good good", Sentiment::Positive)]);

        assert_eq!(classifier.predict("good"), Sentiment::Positive);
        assert_eq!(classifier.predict("not good"), Sentiment::Negative);
        assert_eq!(classifier.predict("never good"), Sentiment::Negative);
    }

    #[test]
    fn test_strong_tokens_score_without_training() {
        let classifier = SentimentClassifier::new();

        assert_eq!(classifier.predict("thanks everyone"), Sentiment::Positive);
        assert_eq!(classifier.predict("this sucks"), Sentiment::Negative);
    }

    #[test]
    fn test_emoticons_decide_unknown_text() {
        let classifier = SentimentClassifier::new();

        assert_eq!(classifier.predict("meeting tomorrow :("), Sentiment::Negative);
        assert_eq!(classifier.predict("meeting tomorrow :)"), Sentiment::Positive);
    }

    #[test]
    fn test_score_breakdown_fields() {
        let mut classifier = SentimentClassifier::new();
        classifier.train(&[LabeledTweet::new("1", "love this weather", Sentiment::Positive)]);

        let score = classifier.score("love the weather");

        assert_eq!(score.label, Sentiment::Positive);
        assert!(score.strong_positive);
        assert!(!score.strong_negative);
        assert_eq!(score.scored_words, 2);
        assert!(score.positive > 1.0);
        assert_eq!(score.negative, 0.0);
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn test_accuracy_over_label_rows() {
        let truth = vec![
            LabelRecord::new("4", "1"),
            LabelRecord::new("0", "2"),
            LabelRecord::new("0", "3"),
        ];
        let predictions = vec![
            LabelRecord::new("4", "1"),
            LabelRecord::new("4", "2"),
            LabelRecord::new("0", "3"),
        ];

        let report = Evaluator::evaluate(&truth, &predictions).unwrap();

        assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].id, "2");
        assert_eq!(report.errors[0].predicted, 4);
        assert_eq!(report.errors[0].actual, 0);
    }

    #[test]
    fn test_extra_rows_on_either_side_ignored() {
        let truth = vec![LabelRecord::new("4", "1")];
        let predictions = vec![LabelRecord::new("4", "1"), LabelRecord::new("0", "2")];

        let report = Evaluator::evaluate(&truth, &predictions).unwrap();
        assert!((report.accuracy - 1.0).abs() < 1e-9);
    }
}

mod end_to_end {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TRAIN: &str = "label,id,date,query,user,text\n\
        4,1,Mon Apr 06 22:19:45 2009,NO_QUERY,alice,\"love this weather :)\"\n\
        4,2,Mon Apr 06 22:19:49 2009,NO_QUERY,bob,what a great morning\n\
        0,3,Mon Apr 06 22:20:00 2009,NO_QUERY,carol,\"I hate delays :(\"\n\
        0,4,Mon Apr 06 22:20:05 2009,NO_QUERY,dave,traffic is terrible today\n";

    const TEST: &str = "id,date,query,user,text\n\
        100,Sat May 16 23:58:44 2009,NO_QUERY,erin,love the weather\n\
        101,Sat May 16 23:58:48 2009,NO_QUERY,frank,terrible traffic today\n";

    /// Run the whole train-predict-evaluate flow against the given truth
    /// file and return the written predictions and report contents.
    fn run_pipeline(truth: &str) -> (String, String) {
        let dir = tempdir().unwrap();
        let train_file = dir.path().join("train.csv");
        let test_file = dir.path().join("test.csv");
        let truth_file = dir.path().join("truth.csv");
        let predictions_file = dir.path().join("predictions.csv");
        let accuracy_file = dir.path().join("accuracy.txt");

        fs::write(&train_file, TRAIN).unwrap();
        fs::write(&test_file, TEST).unwrap();
        fs::write(&truth_file, truth).unwrap();

        let tweets = DataLoader::load_training(&train_file).unwrap();
        let mut classifier = SentimentClassifier::new();
        classifier.train(&tweets);

        let test_tweets = DataLoader::load_test(&test_file).unwrap();
        let predictions = classifier.predict_batch(&test_tweets);
        DataLoader::save_predictions(&predictions, &predictions_file).unwrap();

        let truth_rows = DataLoader::load_truth(&truth_file).unwrap();
        let predicted_rows = DataLoader::load_predictions(&predictions_file).unwrap();
        let report = Evaluator::evaluate(&truth_rows, &predicted_rows).unwrap();
        DataLoader::save_report(&report, &accuracy_file).unwrap();

        (
            fs::read_to_string(&predictions_file).unwrap(),
            fs::read_to_string(&accuracy_file).unwrap(),
        )
    }

    #[test]
    fn test_pipeline_with_perfect_truth() {
        let (predictions, report) = run_pipeline("label,id\n4,100\n0,101\n");

        assert_eq!(predictions, "4,100\n0,101\n");
        assert_eq!(report, "1.000\n");
    }

    #[test]
    fn test_pipeline_records_misclassifications() {
        let (predictions, report) = run_pipeline("label,id\n4,100\n4,101\n");

        assert_eq!(predictions, "4,100\n0,101\n");
        assert_eq!(report, "0.500\n0,4,101\n");
    }

    #[test]
    fn test_trained_lexicon_sizes() {
        let dir = tempdir().unwrap();
        let train_file = dir.path().join("train.csv");
        fs::write(&train_file, TRAIN).unwrap();

        let tweets = DataLoader::load_training(&train_file).unwrap();
        let mut classifier = SentimentClassifier::new();
        classifier.train(&tweets);

        // positive: love, weather, :), great, morning
        // negative: hate, delays, :(, terrible, traffic, today
        let stats = classifier.lexicon().stats();
        assert_eq!(stats.positive_entries, 5);
        assert_eq!(stats.negative_entries, 6);
    }
}
