//! interpreter::parse
//!
//! Turn a tokenized command line into a [`Command`].
//!
//! Parsing is purely syntactic. Whether a branch exists or the staging
//! area is empty is decided later against a snapshot, so parse never fails:
//! malformed input becomes a variant that reports its own usage error.

/// Tokens that stage every working-directory file.
const STAGE_ALL: [&str; 3] = [".", "-A", "--all"];

/// A recognized terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `git <subcommand> ...`
    Git(GitCommand),
    /// `touch <file>`
    Touch { file: Option<String> },
    /// `echo ... > <file>`
    EchoRedirect { file: String },
    /// `echo ...` without a redirect
    Echo { text: String },
    /// `clear`
    Clear,
    /// `help`
    Help,
    /// Anything else; carries the first word.
    NotFound { word: String },
}

/// A `git` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git` with nothing after it
    Bare,
    Init,
    Add(AddTarget),
    Commit(CommitArgs),
    Checkout(CheckoutTarget),
    /// `git branch [name]`
    Branch { name: Option<String> },
    /// `git merge [branch]`
    Merge { branch: Option<String> },
    Status,
    Log,
    Reset(ResetArgs),
    Unknown { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// No pathspec given
    Nothing,
    /// `.`, `-A`, or `--all`
    All,
    /// Named files, duplicates removed, order kept
    Files(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitArgs {
    /// `-m` followed by a message; quote characters already stripped
    Message(String),
    /// Anything else
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// `-b <name>`
    NewBranch(String),
    /// A branch name or commit id prefix
    Existing(String),
    /// No target (or `-b` without a name)
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetArgs {
    /// `--hard HEAD~1`
    HardToParent,
    /// Any other form
    Unsupported,
}

/// Parse a non-empty token list.
pub fn parse(tokens: &[&str]) -> Command {
    match tokens {
        [] => Command::NotFound {
            word: String::new(),
        },
        ["git", rest @ ..] => Command::Git(parse_git(rest)),
        ["touch", rest @ ..] => Command::Touch {
            file: rest.first().map(|f| f.to_string()),
        },
        ["echo", rest @ ..] => parse_echo(rest),
        ["clear", ..] => Command::Clear,
        ["help", ..] => Command::Help,
        [word, ..] => Command::NotFound {
            word: word.to_string(),
        },
    }
}

fn parse_git(args: &[&str]) -> GitCommand {
    let Some((sub, rest)) = args.split_first() else {
        return GitCommand::Bare;
    };

    match *sub {
        "init" => GitCommand::Init,
        "add" => GitCommand::Add(parse_add(rest)),
        "commit" => GitCommand::Commit(parse_commit(rest)),
        "checkout" => GitCommand::Checkout(parse_checkout(rest)),
        "branch" => GitCommand::Branch {
            name: rest.first().map(|s| s.to_string()),
        },
        "merge" => GitCommand::Merge {
            branch: rest.first().map(|s| s.to_string()),
        },
        "status" => GitCommand::Status,
        "log" => GitCommand::Log,
        "reset" => GitCommand::Reset(match rest {
            ["--hard", "HEAD~1", ..] => ResetArgs::HardToParent,
            _ => ResetArgs::Unsupported,
        }),
        other => GitCommand::Unknown {
            name: other.to_string(),
        },
    }
}

fn parse_add(paths: &[&str]) -> AddTarget {
    if paths.is_empty() {
        return AddTarget::Nothing;
    }
    if paths.iter().any(|p| STAGE_ALL.contains(p)) {
        return AddTarget::All;
    }

    let mut files: Vec<String> = Vec::with_capacity(paths.len());
    for path in paths {
        if !files.iter().any(|f| f == path) {
            files.push(path.to_string());
        }
    }
    AddTarget::Files(files)
}

fn parse_commit(args: &[&str]) -> CommitArgs {
    match args {
        ["-m", message @ ..] if !message.is_empty() => {
            CommitArgs::Message(message.join(" ").replace(['"', '\''], ""))
        }
        _ => CommitArgs::Malformed,
    }
}

fn parse_checkout(args: &[&str]) -> CheckoutTarget {
    match args {
        ["-b", name, ..] => CheckoutTarget::NewBranch(name.to_string()),
        ["-b"] | [] => CheckoutTarget::Missing,
        [target, ..] => CheckoutTarget::Existing(target.to_string()),
    }
}

fn parse_echo(args: &[&str]) -> Command {
    // At least one word of text, then `>`, then the file name.
    match args {
        [_, .., ">", file] => Command::EchoRedirect {
            file: file.to_string(),
        },
        _ => Command::Echo {
            text: args.join(" "),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_line(line: &str) -> Command {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        parse(&tokens)
    }

    fn git(line: &str) -> GitCommand {
        match parse_line(line) {
            Command::Git(cmd) => cmd,
            other => panic!("expected git command, got {:?}", other),
        }
    }

    #[test]
    fn bare_git_and_unknown_subcommand() {
        assert_eq!(git("git"), GitCommand::Bare);
        assert_eq!(
            git("git rebase main"),
            GitCommand::Unknown {
                name: "rebase".into()
            }
        );
    }

    #[test]
    fn add_variants() {
        assert_eq!(git("git add"), GitCommand::Add(AddTarget::Nothing));
        assert_eq!(git("git add ."), GitCommand::Add(AddTarget::All));
        assert_eq!(git("git add -A"), GitCommand::Add(AddTarget::All));
        assert_eq!(git("git add a.txt ."), GitCommand::Add(AddTarget::All));
        assert_eq!(
            git("git add a.txt b.txt a.txt"),
            GitCommand::Add(AddTarget::Files(vec!["a.txt".into(), "b.txt".into()]))
        );
    }

    #[test]
    fn commit_message_joins_words_and_strips_quotes() {
        assert_eq!(
            git(r#"git commit -m "fix   the 'thing'""#),
            GitCommand::Commit(CommitArgs::Message("fix the thing".into()))
        );
        assert_eq!(
            git("git commit -m bare"),
            GitCommand::Commit(CommitArgs::Message("bare".into()))
        );
    }

    #[test]
    fn commit_without_message_is_malformed() {
        assert_eq!(git("git commit"), GitCommand::Commit(CommitArgs::Malformed));
        assert_eq!(git("git commit -m"), GitCommand::Commit(CommitArgs::Malformed));
        assert_eq!(
            git("git commit --amend"),
            GitCommand::Commit(CommitArgs::Malformed)
        );
    }

    #[test]
    fn checkout_variants() {
        assert_eq!(
            git("git checkout -b feature"),
            GitCommand::Checkout(CheckoutTarget::NewBranch("feature".into()))
        );
        assert_eq!(
            git("git checkout main"),
            GitCommand::Checkout(CheckoutTarget::Existing("main".into()))
        );
        assert_eq!(git("git checkout -b"), GitCommand::Checkout(CheckoutTarget::Missing));
        assert_eq!(git("git checkout"), GitCommand::Checkout(CheckoutTarget::Missing));
    }

    #[test]
    fn reset_only_accepts_hard_parent() {
        assert_eq!(git("git reset --hard HEAD~1"), GitCommand::Reset(ResetArgs::HardToParent));
        assert_eq!(git("git reset --soft HEAD~1"), GitCommand::Reset(ResetArgs::Unsupported));
        assert_eq!(git("git reset"), GitCommand::Reset(ResetArgs::Unsupported));
    }

    #[test]
    fn echo_redirect_needs_text() {
        assert_eq!(
            parse_line("echo hello world > notes.txt"),
            Command::EchoRedirect {
                file: "notes.txt".into()
            }
        );
        assert_eq!(
            parse_line("echo > notes.txt"),
            Command::Echo {
                text: "> notes.txt".into()
            }
        );
        assert_eq!(
            parse_line("echo \"hi there\""),
            Command::Echo {
                text: "\"hi there\"".into()
            }
        );
    }

    #[test]
    fn other_words() {
        assert_eq!(parse_line("touch"), Command::Touch { file: None });
        assert_eq!(
            parse_line("touch a.txt b.txt"),
            Command::Touch {
                file: Some("a.txt".into())
            }
        );
        assert_eq!(parse_line("clear"), Command::Clear);
        assert_eq!(parse_line("help"), Command::Help);
        assert_eq!(
            parse_line("ls -la"),
            Command::NotFound { word: "ls".into() }
        );
    }
}
