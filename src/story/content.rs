//! The built-in story: "But I have to try"
//!
//! A ferry ride across the souls ocean. Three illustrations are used; every
//! other node shows no picture.

use super::{NodeId, Story, StoryError, StoryGraph};
use crate::assets::ImageManifest;

/// Builds the story graph, registering its illustrations in `manifest`
pub fn build_story(manifest: &mut ImageManifest) -> Result<Story, StoryError> {
    let dark_moon = manifest.register("dark_moon.png");
    let red_moon = manifest.register("red_moon.png");
    let trees = manifest.register("trees.png");

    let mut g = StoryGraph::new();

    // ==================================================================
    // The docks
    // ==================================================================

    let start = g.add_node(
        "When you next open your eyes, you are standing on the docks of a crowded harbour. \
         Small boats mill about, bobbing in the ocean. The incessant chatter of guides \
         haggling with potential passengers grates against your ears.",
        Some(dark_moon),
    );
    let look = g.add_node(
        "As if by instinct, you are drawn to a boat not too far in the distance. \
         The guide, dressed in a shabby blue coat, is watching you.",
        None,
    );
    let boat = g.add_node(
        "You walk over but before you can open your mouth, someone jostles you \
         and you stumble. He grabs your arm and helps you board.",
        None,
    );
    let turn = g.add_node(
        "You frantically look around for another guide but they are busy.",
        None,
    );

    g.add_choice(start, "Look around", "You try to find another guide", look)?;
    g.add_choice(look, "Yes", "Go with him as your guide", boat)?;
    g.add_choice(look, "No", "Turn away", turn)?;
    g.add_choice(turn, "Look back", "He is still watching", start)?;

    // ==================================================================
    // Leaving the harbour
    // ==================================================================

    let price = g.add_node("\"Don't bother. Sit down.\"", None);
    let fine = g.add_node("\"It's fine.\"", None);
    let silence_1 = g.add_node(
        "The boat pulls away from the dock rather quickly. \
         The both of you journey in silence for a while.",
        Some(trees),
    );
    let dead = g.add_node(
        "\"Yes. And no.\" You realise he's punting rather than rowing, using a \
         pole to push against the riverbed. \"You're being asked to resettle in an \
         existence of not quite living but you're more than half alive.\"",
        None,
    );
    let lean = g.add_node(
        "\"Don't lean over,\" he warns. You pull your head back, feeling guilty for \
         some reason. \"The souls ocean is bottomless.\"",
        None,
    );

    g.add_choice(boat, "You don't trust him", "What's your price?", price)?;
    g.add_choice(boat, "You are grateful", "Thank you", fine)?;
    g.add_choice(price, "Sit in silence", "He starts rowing", silence_1)?;
    g.add_choice(fine, "Sit in silence", "He starts rowing", silence_1)?;
    g.add_choice(silence_1, "Muster up the courage", "\"Am I dead?\"", dead)?;
    g.add_choice(dead, "Accept this", "You are oddly calm", lean)?;

    // ==================================================================
    // The souls ocean
    // ==================================================================

    let no_soul = g.add_node(
        "\"No,\" he immediately replies. He moves around so easily on the boat, \
         it's hard to imagine him on land. \"I don't have a soul.\"",
        None,
    );
    let depths = g.add_node(
        "\"Yes.\" He looks away from his incessant punting and gives you a once over. \
         \"It will drag down anyone with a soul to the very depths.\"",
        None,
    );
    let bottomless = g.add_node(
        "\"Yes.\" He propels the boat forward by pushing off the riverbed once more. \
         \"Doesn't make sense but trust me.\"",
        None,
    );
    let silence_2 = g.add_node(
        "At your silence, he turns around. The wind must be chilly but he stands \
         against it like it's a passing breeze. He holds up his pole and flicks his \
         wrist, splashing droplets of water into your face. Remembering his warning \
         about souls, your arms come up to protect your face. The droplets fall on \
         your skin harmlessly. You stare at him incredulously.",
        None,
    );

    g.add_choice(lean, "Ask", "\"Aren't you afraid of falling in?\"", no_soul)?;
    g.add_choice(lean, "Ask", "\"The souls ocean?\"", depths)?;
    g.add_choice(lean, "Ask", "\"Bottomless?\"", bottomless)?;
    for node in [bottomless, depths, no_soul] {
        g.add_choice(node, "Speechless", "Try to enjoy the ride", silence_2)?;
    }

    let grace = g.add_node(
        "\"I'm your guide, you know,\" he says, as if reading your mind. \"It's my \
         utmost duty to keep you safe.\" It takes some time before you pull away \
         completely from the docks. Before you know it, there are no other boats in \
         sight, only the dim outline of the distant shore.",
        None,
    );
    let yell = g.add_node(
        "You open your mouth but for some strange reason, you can't bring yourself \
         to scold him. Perplexed, you lean back but don't hide your annoyance.",
        None,
    );
    let joke = g.add_node(
        "\"No.\" He turns back to the front. \"The lack of oxygen from falling in and \
         drowning will get you. The water itself is harmless.\"",
        None,
    );

    g.add_choice(yell, "You're not pleased", "You let it go, against your will", grace)?;
    g.add_choice(joke, "You're not pleased", "You let it go, against your will", grace)?;
    g.add_choice(silence_2, "You're angry", "Yell at him", yell)?;
    g.add_choice(
        silence_2,
        "Ask",
        "\"Was that bottomless ocean thing a joke?\"",
        joke,
    )?;
    g.add_choice(silence_2, "You give him grace", "Let it be", grace)?;

    // ==================================================================
    // Questions for the guide
    // ==================================================================

    let who = build_chase(&mut g, red_moon)?;

    let going = g.add_node("\"To the place where new things begin.\"", None);
    let just_you = g.add_node(
        "\"Just you. I'll be staying for the next passenger.\"",
        None,
    );
    g.add_choice(grace, "Ask", "\"Where are we going?\"", going)?;
    g.add_choice(going, "Ask", "\"The both of us?\"", just_you)?;
    g.add_choice(just_you, "Ask", "\"Who are you?\"", who)?;

    let accept = g.add_node("\"I was asked and accepted it.\"", None);
    g.add_choice(grace, "Ask", "How did you get this job?", accept)?;
    g.add_choice(accept, "Ask", "\"Who are you?\"", who)?;

    let years = g.add_node(
        "\"Time is difficult here. Around 80 years, I think.\"",
        None,
    );
    let bored = g.add_node("\"Not at all.\"", None);
    g.add_choice(
        grace,
        "Ask",
        "\"How long have you been doing this for?\"",
        years,
    )?;
    g.add_choice(years, "Ask", "\"80 years? Don't you ever get bored?\"", bored)?;
    g.add_choice(bored, "Ask", "\"Who are you?\"", who)?;

    Ok(Story { graph: g, start })
}

/// The monster chase through to the ending; returns the node it starts at
fn build_chase(
    g: &mut StoryGraph,
    red_moon: crate::assets::ImageId,
) -> Result<NodeId, StoryError> {
    let who = g.add_node(
        "You're about to ask him the question when there's a low groan across the \
         waters. Your guide tenses, in the practiced way when people don't want \
         others to panic.",
        None,
    );
    let nothing = g.add_node(
        "\"Nothing.\" He exhales defeatedly, catching himself, then says, \
         \"Something is happening but it's fine. I've done this before.\"",
        None,
    );
    let outrun = g.add_node(
        "\"Outrun a monster.\" Immediately afterwards, a dangerous torrent swirls \
         into a whirlpool. You look back and see a monster tower over the waves. \
         \"There's no need to worry,\" he says, in a voice that definitely suggests \
         you should worry.",
        None,
    );
    let swamp = g.add_node(
        "He deftly manoeuvres the boat into a swamp with low-hanging vines. This \
         only makes the beast speed towards the both of you at new, unfounded speeds.",
        Some(red_moon),
    );

    g.add_choice(who, "Ask", "\"What's wrong?\"", nothing)?;
    g.add_choice(nothing, "Ask", "\"Done what?\"", outrun)?;
    g.add_choice(outrun, "Believe him", "Don't worry", swamp)?;
    g.add_choice(outrun, "Don't believe him", "Worry", swamp)?;

    let catch = g.add_node("\"I'm not its favourite patron.\"", None);
    let auditor = g.add_node("\"The auditor. For lost and found.\"", None);
    let what = g.add_node(
        "He doesn't reply at first. He keeps punting and looking over his shoulder. \
         You hold on to the side of the boat until the wood splinters cut your palms \
         and fingers. From behind, the monster keeps drawing closer.",
        None,
    );
    let name = g.add_node(
        "He says your name. It would have completely slipped past you except he \
         becomes utterly still. He meets your eyes like a soldier being told to go \
         on the frontlines.",
        None,
    );

    g.add_choice(swamp, "Ask", "\"Why is it chasing us?\"", catch)?;
    g.add_choice(swamp, "Ask", "\"What is that?\"", auditor)?;
    g.add_choice(auditor, "Ask", "\"What?\"", what)?;
    g.add_choice(catch, "Ask", "\"What?\"", what)?;
    g.add_choice(what, "Ask", "Hey?", name)?;

    let memory = g.add_node(
        "The memories tear down the mental walls in your mind. You remember him now. \
         Blood on his hands, crying over your body and begging to see you one last \
         time. They granted his wish. Each time, he guides you to the realm where you \
         start your new life. He waits to see you between lifetimes and loses you, \
         again and again.",
        None,
    );
    let engulf = g.add_node(
        "The creature arrives in the swamp but rather than the brutal impact, horror \
         and gore, a cloud of soft fog so fierce and grey engulfs everything whole. \
         His name eludes you. The fog swallows him up and the traces of your life in \
         this realm are fading away.",
        None,
    );
    let end = g.add_node(
        "He raises his hand in farewell and the cycle begins again.",
        None,
    );

    g.add_choice(name, "You remember", "Get your answers", memory)?;
    g.add_choice(name, "Block it out", "Your mind doesn't want to remember", memory)?;
    g.add_choice(memory, "There is no choice", "There is only one way this ends", engulf)?;
    g.add_choice(engulf, "Remember", "Say his name", end)?;
    g.add_choice(engulf, "Try to be kind", "Don't say his name", end)?;

    Ok(who)
}
