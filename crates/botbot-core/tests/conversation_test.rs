//! End-to-end conversations through `BotBot::handle`.

use botbot_core::{
    parse, BotBot, BotBotConfig, DirectoryStore, InboundMessage, Intent, Referent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const HUMAN: &str = "human@example.com";

fn new_bot() -> BotBot {
    let config = BotBotConfig::builder().in_memory().build();
    BotBot::new(&config)
        .unwrap()
        .with_rng(StdRng::seed_from_u64(42))
}

fn say(bot: &mut BotBot, content: &str) -> String {
    let mut replies: Vec<String> = Vec::new();
    bot.handle(&InboundMessage::new(content, HUMAN), &mut replies);
    assert_eq!(replies.len(), 1, "expected exactly one reply to {:?}", content);
    replies.remove(0)
}

/// Introducing Pairing Bot stores her and her stemmed topics.
#[test]
fn test_add_pairing() {
    let mut bot = new_bot();

    let reply = say(
        &mut bot,
        "I'd like to introduce you to @**Pairing Bot!**, she knows about pair and pearing",
    );
    assert_eq!(
        reply,
        "Thanks! I love meeting new people and can't wait to talk to her."
    );

    let pear = bot.directory().find_by_topic("pear").unwrap().unwrap();
    assert_eq!(pear.name, "Pairing Bot!");
    let pair = bot.directory().find_by_topic("pair").unwrap().unwrap();
    assert_eq!(pair.pronoun, "she");
}

/// Topics are found by their stem and by inflections of it.
#[test]
fn test_topic_query_matches_inflections() {
    let mut bot = new_bot();
    say(
        &mut bot,
        "I'd like to introduce you to @**Pairing Bot!**, she knows about pair and pearing",
    );

    for question in ["pear", "Any pearings today?", "who does pairing", "PAIRS?"] {
        let reply = say(&mut bot, question);
        assert!(
            reply.starts_with("My friend @**Pairing Bot!** can help you with that. She is "),
            "unexpected reply to {:?}: {}",
            question,
            reply
        );
    }
}

/// The first word in message order that resolves wins.
#[test]
fn test_topic_query_first_word_wins() {
    let mut bot = new_bot();
    say(&mut bot, "introduce you to @Weather, they know about forecasts");
    say(&mut bot, "introduce you to @Chef, he knows about recipes");

    let reply = say(&mut bot, "recipes or forecasts?");
    assert!(reply.starts_with("My friend @**Chef** can help you with that. He is "));

    let reply = say(&mut bot, "forecasts or recipes?");
    assert!(reply.starts_with("My friend @**Weather** can help you with that. They are "));
}

#[test]
fn test_unknown_topic() {
    let mut bot = new_bot();
    assert_eq!(
        say(&mut bot, "Which bot knows about knitting?"),
        "Sorry, I don't know how to help you with that."
    );
}

/// Re-introducing with one old and one new topic only reports the new one.
#[test]
fn test_reintroduction_adds_only_new_topics() {
    let mut bot = new_bot();
    say(&mut bot, "introduce you to @**Pairing Bot!**, she knows about pairing");

    let reply = say(
        &mut bot,
        "introduce you to @**Pairing Bot!**, she knows about pairs and scheduling",
    );
    assert_eq!(
        reply,
        "Thank you! I already know Pairing Bot!, but didn't know she knew about schedul."
    );

    let reply = say(&mut bot, "introduce you to @**Pairing Bot!**, she knows about pairs");
    assert!(reply.starts_with("Thank you! I already know Pairing Bot!. They are "));

    assert_eq!(bot.directory().all_referents().unwrap().len(), 1);
}

#[test]
fn test_introduction_not_understood() {
    let mut bot = new_bot();
    assert_eq!(
        say(&mut bot, "I want to introduce a new bot but forgot its name"),
        "I love to meet new people, but I don't understand."
    );
    assert!(bot.directory().all_referents().unwrap().is_empty());
}

/// Forgetting removes the bot from topic queries and from the listing.
#[test]
fn test_forget() {
    let mut bot = new_bot();
    bot.directory()
        .add_referent(
            &Referent::new("bad bot", "he").with_topics(["swearing", "shouting"]),
        )
        .unwrap();

    assert_eq!(
        say(&mut bot, "Forget about @**bad bot**!"),
        "I'll never speak of bad bot again."
    );
    assert!(bot.directory().find_by_topic("swearing").unwrap().is_none());
    assert_eq!(
        say(&mut bot, "shouting"),
        "Sorry, I don't know how to help you with that."
    );
    assert_eq!(say(&mut bot, "Who do you know?"), "I don't know anyone yet.");
}

/// BotBot itself can be introduced but never forgotten.
#[test]
fn test_first_person_is_unforgettable() {
    let mut bot = new_bot();
    say(&mut bot, "I'd like to introduce you to @BotBot, you know about bots.");

    for _ in 0..2 {
        assert_eq!(say(&mut bot, "forget @BotBot"), "I'm unforgettable.");
    }
    assert!(bot.directory().find_by_name("BotBot").unwrap().is_some());
    assert_eq!(
        say(&mut bot, "Do you know any good bots?"),
        "I can help you with that. I know all the best bots."
    );
}

#[test]
fn test_first_person_introduction_reply() {
    let mut bot = new_bot();
    assert_eq!(
        say(&mut bot, "I'd like to introduce you to @BotBot, you know about bots."),
        "Thanks! I love meeting new people and can't wait to talk to me."
    );
}

#[test]
fn test_list_known() {
    let mut bot = new_bot();
    assert_eq!(say(&mut bot, "Who do you know?"), "I don't know anyone yet.");

    say(&mut bot, "introduce you to @Alpha, he knows about a-things");
    assert_eq!(say(&mut bot, "who do you know"), "I know everyone: @**Alpha**.");

    say(&mut bot, "introduce you to @Beta, she knows about b-things");
    say(&mut bot, "introduce you to @**Gamma Ray**, ze knows about c-things");
    assert_eq!(
        say(&mut bot, "Who do you know?"),
        "I know everyone: @**Alpha**, @**Beta** and @**Gamma Ray**."
    );
}

#[test]
fn test_thanks() {
    let mut bot = new_bot();
    let reply = say(&mut bot, "Thanks BotBot!");
    assert!(["You're welcome!", "No problem!", "Happy to help!"].contains(&reply.as_str()));
}

#[test]
fn test_seeded_bots_reply_identically() {
    let script = [
        "introduce you to @Chef, he knows about recipes",
        "recipes?",
        "introduce you to @Chef, he knows about recipes",
        "thanks",
    ];

    let mut first = new_bot();
    let mut second = new_bot();
    for line in script {
        assert_eq!(say(&mut first, line), say(&mut second, line));
    }
}

#[test]
fn test_parse_is_pure() {
    let text = "I'd like to introduce you to @**Pairing Bot!**, she knows about pair and pearing";
    let first = parse(text);
    assert_eq!(first, parse(text));
    assert_eq!(
        first,
        Intent::Introduce(Ok(
            Referent::new("Pairing Bot!", "she").with_topics(["pair", "pear"])
        ))
    );
}

/// The directory survives a restart.
#[test]
fn test_directory_persists_between_bots() {
    let dir = tempfile::tempdir().unwrap();
    let config = BotBotConfig::builder()
        .db_path(dir.path().join("botbot.db"))
        .build();

    {
        let mut bot = BotBot::new(&config).unwrap();
        say(&mut bot, "introduce you to @Chef, he knows about recipes");
    }

    let mut bot = BotBot::new(&config).unwrap();
    assert!(say(&mut bot, "any recipes?").starts_with("My friend @**Chef**"));
}
