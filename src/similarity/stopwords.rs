//! English stop words dropped by the bag-of-words vectorizer before
//! counting. Based on the common NLTK/sklearn lists; all lowercase.

pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "outside", "over",
    "through", "throughout", "to", "toward", "under", "until", "up", "upon", "with", "within",
    "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so", "than", "that", "though",
    "unless", "while",
    // auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "would", "should", "could", "can", "may", "might", "must",
    "will", "shall",
    // determiners and adverbs
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "neither", "no",
    "none", "not", "one", "other", "same", "several", "some", "such", "very", "too", "only",
    "own", "then", "there", "these", "this", "those", "just", "now", "here",
    // frequent low-signal words
    "again", "also", "another", "back", "even", "ever", "get", "go", "got", "made", "make",
    "say", "see", "take", "way",
];
