//! Embedded seed lexicon.
//!
//! A small WordNet-shaped sense inventory covering common English words, so
//! synonym matching works without a WordNet install. Install a full database
//! with [`Lexicon::from_wordnet_dir`] and [`install_shared`](crate::install_shared)
//! for real documents.

use crate::lexicon::Lexicon;
use crate::synset::PartOfSpeech::{self, Adjective as A, Adverb as R, Noun as N, Verb as V};

const SEED_SYNSETS: &[(PartOfSpeech, &[&str])] = &[
    // feelings
    (A, &["happy"]),
    (A, &["felicitous", "happy"]),
    (A, &["glad", "happy"]),
    (A, &["glad"]),
    (A, &["beaming", "glad"]),
    (A, &["sad"]),
    (A, &["deplorable", "distressing", "lamentable", "pitiful", "sad", "sorry"]),
    (A, &["unhappy"]),
    (A, &["dysphoric", "distressed", "unhappy"]),
    (N, &["joy", "joyousness", "joyfulness"]),
    (N, &["happiness", "felicity"]),
    (N, &["sadness", "unhappiness"]),
    // speed
    (A, &["quick", "speedy"]),
    (A, &["agile", "nimble", "quick", "spry"]),
    (A, &["fast"]),
    (A, &["fast", "firm", "immobile"]),
    (A, &["rapid", "speedy"]),
    (A, &["slow"]),
    (A, &["dense", "dim", "dull", "dumb", "obtuse", "slow"]),
    (R, &["quickly", "rapidly", "speedily", "chop-chop", "fast", "apace"]),
    (R, &["quickly", "speedily", "quick"]),
    (R, &["slowly", "slow", "easy", "tardily"]),
    // size
    (A, &["large", "big"]),
    (A, &["big", "bad"]),
    (A, &["adult", "big", "full-grown", "fully_grown", "grown", "grownup"]),
    (A, &["huge", "immense", "vast", "Brobdingnagian"]),
    (A, &["small", "little"]),
    (A, &["little", "small"]),
    (A, &["minor", "modest", "small", "small-scale", "pocket-size", "pocket-sized"]),
    (A, &["tiny", "bantam", "diminutive", "lilliputian", "midget", "petite", "flyspeck"]),
    // intelligence
    (A, &["intelligent"]),
    (A, &["bright", "smart"]),
    (A, &["smart", "voguish"]),
    (A, &["clever", "cagey", "cagy", "canny", "smart"]),
    (A, &["apt", "clever"]),
    (A, &["bright"]),
    (A, &["stupid"]),
    (A, &["dazed", "stunned", "stupefied", "stupid"]),
    // quality
    (A, &["good"]),
    (A, &["full", "good"]),
    (A, &["estimable", "good", "honorable", "respectable"]),
    (A, &["beneficial", "good"]),
    (A, &["adept", "expert", "good", "practiced", "proficient", "skillful", "skilful"]),
    (A, &["bad"]),
    (A, &["poor", "bad", "wretched"]),
    (R, &["well", "good"]),
    (A, &["similar"]),
    (A, &["alike", "similar", "like"]),
    (A, &["different"]),
    (A, &["unlike", "dissimilar", "different"]),
    (A, &["brown", "brownish", "chocolate-brown", "dark-brown"]),
    // animals
    (N, &["cat", "true_cat"]),
    (N, &["guy", "cat", "hombre", "bozo"]),
    (N, &["big_cat", "cat"]),
    (
        V,
        &[
            "vomit", "vomit_up", "purge", "cast", "sick", "cat", "be_sick", "disgorge", "regorge",
            "retch", "puke", "barf", "spew", "spue", "chuck", "upchuck", "honk", "regurgitate",
            "throw_up",
        ],
    ),
    (N, &["dog", "domestic_dog", "Canis_familiaris"]),
    (N, &["frump", "dog"]),
    (N, &["cad", "bounder", "blackguard", "dog", "hound", "heel"]),
    (N, &["frank", "frankfurter", "hotdog", "hot_dog", "dog", "wiener", "wienerwurst", "weenie"]),
    (
        V,
        &[
            "chase", "chase_after", "trail", "tail", "tag", "give_chase", "dog", "go_after",
            "track",
        ],
    ),
    (N, &["fox"]),
    (N, &["dodger", "fox", "slyboots"]),
    (
        V,
        &[
            "confuse", "throw", "fox", "befuddle", "fuddle", "bedevil", "confound",
            "discombobulate",
        ],
    ),
    (N, &["mouse"]),
    (N, &["mouse", "computer_mouse"]),
    // people and places
    (
        N,
        &[
            "child", "kid", "youngster", "minor", "shaver", "nipper", "small_fry", "tiddler",
            "tike", "tyke", "fry", "nestling",
        ],
    ),
    (N, &["kid", "child"]),
    (N, &["child", "baby"]),
    (N, &["man", "adult_male"]),
    (N, &["woman", "adult_female"]),
    (N, &["person", "individual", "someone", "somebody", "mortal", "soul"]),
    (N, &["house"]),
    (N, &["home", "place"]),
    (N, &["dwelling", "home", "domicile", "abode", "habitation", "dwelling_house"]),
    (N, &["car", "auto", "automobile", "machine", "motorcar"]),
    // actions
    (V, &["begin", "get", "start_out", "start", "set_about", "set_out", "commence"]),
    (V, &["start", "start_up", "embark_on", "commence"]),
    (V, &["begin", "start"]),
    (N, &["beginning", "start", "commencement"]),
    (V, &["end", "terminate"]),
    (V, &["finish", "complete"]),
    (V, &["stop", "finish", "terminate", "cease"]),
    (N, &["end", "ending"]),
    (N, &["end", "close", "closing", "ending"]),
    (N, &["finish", "finishing"]),
    (V, &["buy", "purchase"]),
    (N, &["purchase"]),
    (V, &["help", "assist", "aid"]),
    (N, &["aid", "assist", "assistance", "help"]),
    (V, &["run"]),
    (
        V,
        &[
            "scat", "run", "scarper", "turn_tail", "lam", "run_away", "hightail_it", "bunk",
            "escape", "fly_the_coop", "break_away",
        ],
    ),
    (N, &["run", "running"]),
    (V, &["walk"]),
    (V, &["talk", "speak"]),
    (V, &["speak", "talk"]),
    (N, &["talk", "talking"]),
    (V, &["say", "state", "tell"]),
    (V, &["answer", "reply", "respond"]),
    (N, &["answer", "reply", "response"]),
    (V, &["show", "demo", "exhibit", "present", "demonstrate"]),
    (V, &["display", "exhibit"]),
    (V, &["learn", "larn", "acquire"]),
    (V, &["study", "learn", "read", "take"]),
    (V, &["analyze", "analyse", "study", "examine", "canvass", "canvas"]),
    (V, &["write", "compose", "pen", "indite"]),
    (V, &["copy", "re-create"]),
    (V, &["think", "believe", "consider", "conceive"]),
    // documents
    (N, &["text", "textual_matter"]),
    (N, &["text", "schoolbook", "school_text", "text_edition"]),
    (N, &["document", "written_document", "papers"]),
    (N, &["word"]),
    (N, &["sentence"]),
    (N, &["mistake", "error", "fault"]),
    (N, &["error", "erroneousness"]),
    (N, &["idea", "thought"]),
    (N, &["meaning", "significance", "signification", "import"]),
    (N, &["copy"]),
];

const SEED_EXCEPTIONS: &[(PartOfSpeech, &str, &[&str])] = &[
    (N, "children", &["child"]),
    (N, "men", &["man"]),
    (N, "women", &["woman"]),
    (N, "mice", &["mouse"]),
    (N, "people", &["person"]),
    (V, "ran", &["run"]),
    (V, "running", &["run"]),
    (V, "began", &["begin"]),
    (V, "begun", &["begin"]),
    (V, "bought", &["buy"]),
    (V, "spoke", &["speak"]),
    (V, "spoken", &["speak"]),
    (V, "said", &["say"]),
    (V, "shown", &["show"]),
    (V, "wrote", &["write"]),
    (V, "written", &["write"]),
    (V, "thought", &["think"]),
    (A, "better", &["good", "well"]),
    (A, "best", &["good", "well"]),
    (A, "worse", &["bad"]),
    (A, "worst", &["bad"]),
    (A, "bigger", &["big"]),
    (A, "biggest", &["big"]),
    (A, "happier", &["happy"]),
    (A, "happiest", &["happy"]),
    (A, "sadder", &["sad"]),
    (A, "saddest", &["sad"]),
];

impl Lexicon {
    /// The embedded seed lexicon.
    pub fn builtin() -> Lexicon {
        let mut builder = Lexicon::builder();
        for (pos, lemmas) in SEED_SYNSETS {
            builder.add_synset(*pos, lemmas.iter().copied());
        }
        for (pos, inflected, bases) in SEED_EXCEPTIONS {
            builder.add_exception(*pos, inflected, bases.iter().copied());
        }
        builder.build()
    }
}
