use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` / `:quit`, `:h` / `:help`, `:w` / `:write`
/// - `:ls` → list stories, `:show N`, `:rm N`
/// - `:add N:P word | definition | translation [| part of speech [| note]]`
///   → save a word from sentence P of story N
/// - `:level N difficulty` → set the difficulty of story N
/// - `:words [N]`, `:unsave ID`
/// - `@filename` → import file, `@` or `@@` → import clipboard
/// - Anything else → Unknown
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, args) = match cmd.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (cmd, ""),
        };
        parse_system_command(name, args).unwrap_or_else(|| ReplCommand::Unknown(input.to_string()))
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Unknown(input.to_string())
    }
}

fn parse_system_command(name: &str, args: &str) -> Option<ReplCommand> {
    let command = match (name, args.is_empty()) {
        ("q" | "quit", true) => ReplCommand::Quit,
        ("h" | "help", true) => ReplCommand::Help,
        ("w" | "write", true) => ReplCommand::SaveLibrary,
        ("ls" | "stories", true) => ReplCommand::ListStories,
        ("show", false) => ReplCommand::ShowStory(args.parse().ok()?),
        ("rm", false) => ReplCommand::DeleteStory(args.parse().ok()?),
        ("level", false) => {
            let (story, level) = args.split_once(char::is_whitespace)?;
            ReplCommand::SetDifficulty {
                story: story.parse().ok()?,
                level: level.trim().to_string(),
            }
        }
        ("words", true) => ReplCommand::ListWords(None),
        ("words", false) => ReplCommand::ListWords(Some(args.parse().ok()?)),
        ("unsave", false) => ReplCommand::DeleteWord(args.parse().ok()?),
        ("add", false) => parse_save_word(args)?,
        _ => return None,
    };
    Some(command)
}

/// `N:P word | definition | translation [| part of speech [| note]]`
///
/// The two trailing fields are optional and may be left blank.
fn parse_save_word(args: &str) -> Option<ReplCommand> {
    let (target, rest) = args.split_once(char::is_whitespace)?;
    let (story, position) = target.split_once(':')?;

    let mut fields = rest.split('|').map(str::trim);
    let word = fields.next().filter(|f| !f.is_empty())?;
    let definition = fields.next().filter(|f| !f.is_empty())?;
    let translation = fields.next().filter(|f| !f.is_empty())?;
    let part_of_speech = fields.next().filter(|f| !f.is_empty()).map(str::to_string);
    let context_note = fields.next().filter(|f| !f.is_empty()).map(str::to_string);
    if fields.next().is_some() {
        return None;
    }

    Some(ReplCommand::SaveWord {
        story: story.parse().ok()?,
        position: position.parse().ok()?,
        word: word.to_string(),
        definition: definition.to_string(),
        translation: translation.to_string(),
        part_of_speech,
        context_note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_repl_input("@story.txt"),
            ReplCommand::LoadFile("story.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_repl_input("@  my story.txt"),
            ReplCommand::LoadFile("my story.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_repl_input("@@"), ReplCommand::LoadClipboard);
        assert_eq!(parse_repl_input("@"), ReplCommand::LoadClipboard);
    }

    #[test]
    fn test_parse_story_commands() {
        assert_eq!(parse_repl_input(":ls"), ReplCommand::ListStories);
        assert_eq!(parse_repl_input(":show 3"), ReplCommand::ShowStory(3));
        assert_eq!(parse_repl_input(":rm  12 "), ReplCommand::DeleteStory(12));
        assert!(matches!(parse_repl_input(":show x"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":show"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_word_commands() {
        assert_eq!(parse_repl_input(":words"), ReplCommand::ListWords(None));
        assert_eq!(parse_repl_input(":words 2"), ReplCommand::ListWords(Some(2)));
        assert_eq!(parse_repl_input(":unsave 5"), ReplCommand::DeleteWord(5));
        assert_eq!(parse_repl_input(":w"), ReplCommand::SaveLibrary);
    }

    #[test]
    fn test_parse_add_word() {
        assert_eq!(
            parse_repl_input(":add 1:0 marché | place where goods are sold | market"),
            ReplCommand::SaveWord {
                story: 1,
                position: 0,
                word: "marché".to_string(),
                definition: "place where goods are sold".to_string(),
                translation: "market".to_string(),
                part_of_speech: None,
                context_note: None,
            }
        );
    }

    #[test]
    fn test_parse_add_word_with_optional_fields() {
        assert_eq!(
            parse_repl_input(":add 2:1 pommes | fruit | apples | noun | plural"),
            ReplCommand::SaveWord {
                story: 2,
                position: 1,
                word: "pommes".to_string(),
                definition: "fruit".to_string(),
                translation: "apples".to_string(),
                part_of_speech: Some("noun".to_string()),
                context_note: Some("plural".to_string()),
            }
        );
        assert!(matches!(
            parse_repl_input(":add 2:1 pommes | fruit | apples |  | plural"),
            ReplCommand::SaveWord { part_of_speech: None, context_note: Some(_), .. }
        ));
    }

    #[test]
    fn test_parse_set_difficulty() {
        assert_eq!(
            parse_repl_input(":level 3  Beginner"),
            ReplCommand::SetDifficulty {
                story: 3,
                level: "Beginner".to_string()
            }
        );
        assert!(matches!(parse_repl_input(":level 3"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":level x easy"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_add_word_rejects_missing_fields() {
        assert!(matches!(parse_repl_input(":add 1:0 marché | market"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":add 1 marché | a | b"), ReplCommand::Unknown(_)));
        assert!(matches!(
            parse_repl_input(":add 1:0 a | b | c | d | e | f"),
            ReplCommand::Unknown(_)
        ));
        assert!(matches!(parse_repl_input(":add 1:0  | b | c"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_arguments_on_bare_commands() {
        assert!(matches!(parse_repl_input(":q now"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_repl_input(""), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_repl_input("invalid"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":nope"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(parse_repl_input("   "), ReplCommand::Unknown(_)));
    }
}
