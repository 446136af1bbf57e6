//! interpreter::exec
//!
//! Validate a parsed command against a snapshot and plan its actions.
//!
//! # Architecture
//!
//! ```text
//! line -> tokens -> Command -> plan(snapshot) -> Interpretation
//! ```
//!
//! # Invariants
//!
//! - Response text is computed from the snapshot *before* any planned
//!   action is applied. A commit summary therefore names the prior HEAD,
//!   and `reset` reports the commit it moved away from.
//! - A rejected command plans no actions.

use tracing::trace;

use crate::core::types::{BranchName, FileName};
use crate::store::action::{Action, Pathspec};
use crate::store::state::Snapshot;

use super::error::CommandError;
use super::parse::{self, AddTarget, CheckoutTarget, Command, CommitArgs, GitCommand, ResetArgs};
use super::render;

/// The planned effect of one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// Actions to apply, in order.
    pub actions: Vec<Action>,
    /// Text shown to the user.
    pub response: String,
    pub is_error: bool,
    /// Whether the line goes into the command log.
    pub record: bool,
}

impl Interpretation {
    fn ok(actions: Vec<Action>, response: impl Into<String>) -> Self {
        Self {
            actions,
            response: response.into(),
            is_error: false,
            record: true,
        }
    }

    fn say(response: impl Into<String>) -> Self {
        Self::ok(Vec::new(), response)
    }

    fn act(action: Action, response: impl Into<String>) -> Self {
        Self::ok(vec![action], response)
    }
}

impl From<CommandError> for Interpretation {
    fn from(err: CommandError) -> Self {
        Self {
            actions: Vec::new(),
            response: err.to_string(),
            is_error: true,
            record: true,
        }
    }
}

type Plan = Result<Interpretation, CommandError>;

/// Interpret one command line. Returns `None` for blank input.
pub fn interpret(snapshot: &Snapshot, line: &str) -> Option<Interpretation> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let command = parse::parse(&tokens);
    trace!(?command, "parsed");

    Some(plan(snapshot, command).unwrap_or_else(Interpretation::from))
}

fn plan(snapshot: &Snapshot, command: Command) -> Plan {
    match command {
        Command::Git(git) => plan_git(snapshot, git),
        Command::Touch { file } => touch(file),
        Command::EchoRedirect { file } => echo_redirect(snapshot, &file),
        Command::Echo { text } => Ok(Interpretation::say(text)),
        Command::Clear => Ok(Interpretation {
            record: false,
            ..Interpretation::act(Action::ResetAll, "")
        }),
        Command::Help => Ok(Interpretation::say(render::HELP)),
        Command::NotFound { word } => Err(CommandError::NotFound(word)),
    }
}

fn plan_git(snapshot: &Snapshot, command: GitCommand) -> Plan {
    if !snapshot.initialized && command != GitCommand::Init {
        return Err(CommandError::NotARepository);
    }

    match command {
        GitCommand::Init => Ok(init(snapshot)),
        GitCommand::Bare => Err(CommandError::GitUsage),
        GitCommand::Add(target) => add(snapshot, target),
        GitCommand::Commit(args) => commit(snapshot, args),
        GitCommand::Checkout(target) => checkout(snapshot, target),
        GitCommand::Branch { name: None } => Ok(Interpretation::say(render::branch_list(snapshot))),
        GitCommand::Branch { name: Some(name) } => {
            let branch = new_branch_name(snapshot, &name)?;
            Ok(Interpretation::act(
                Action::CreateBranch {
                    name: branch,
                    from: None,
                },
                format!("Created branch '{}'", name),
            ))
        }
        GitCommand::Merge { branch } => merge(snapshot, branch),
        GitCommand::Status => Ok(Interpretation::say(render::status(snapshot))),
        GitCommand::Log => {
            if snapshot.commits.is_empty() {
                return Err(CommandError::NoCommitsYet);
            }
            Ok(Interpretation::say(render::log(snapshot)))
        }
        GitCommand::Reset(ResetArgs::HardToParent) => {
            if snapshot.commits.is_empty() {
                return Err(CommandError::AmbiguousParent);
            }
            Ok(Interpretation::act(
                Action::hard_reset_one(),
                format!("HEAD is now at {}", snapshot.head_abbrev()),
            ))
        }
        GitCommand::Reset(ResetArgs::Unsupported) => Err(CommandError::ResetUsage),
        GitCommand::Unknown { name } => Err(CommandError::UnknownSubcommand(name)),
    }
}

fn init(snapshot: &Snapshot) -> Interpretation {
    if snapshot.initialized {
        Interpretation::say("Reinitialized existing Git repository in .git/")
    } else {
        Interpretation::act(
            Action::Initialize,
            "Initialized empty Git repository in .git/",
        )
    }
}

fn add(snapshot: &Snapshot, target: AddTarget) -> Plan {
    match target {
        AddTarget::Nothing => Err(CommandError::NothingSpecified),
        AddTarget::All if snapshot.working_dir.is_empty() => {
            Ok(Interpretation::say("No files to add."))
        }
        AddTarget::All => Ok(Interpretation::act(
            Action::Stage {
                paths: Pathspec::All,
            },
            format!(
                "Added {} file(s) to staging area",
                snapshot.working_dir.len()
            ),
        )),
        AddTarget::Files(paths) => {
            let mut files = Vec::with_capacity(paths.len());
            for path in &paths {
                match snapshot.working_file(path) {
                    Some(entry) => files.push(entry.name.clone()),
                    None => return Err(CommandError::PathspecNoMatch(path.clone())),
                }
            }

            let response = match paths.as_slice() {
                [single] => format!("Added '{}' to staging area", single),
                many => format!("Added {} file(s) to staging area", many.len()),
            };
            Ok(Interpretation::act(
                Action::Stage {
                    paths: Pathspec::Files(files),
                },
                response,
            ))
        }
    }
}

fn commit(snapshot: &Snapshot, args: CommitArgs) -> Plan {
    if snapshot.staged.is_empty() {
        return Err(CommandError::NothingToCommit);
    }

    let CommitArgs::Message(message) = args else {
        return Err(CommandError::CommitUsage);
    };
    if message.trim().is_empty() {
        return Err(CommandError::EmptyCommitMessage);
    }

    let response = format!(
        "[{} {}] {}\n {} file(s) changed",
        render::head_label(snapshot),
        snapshot.head_abbrev(),
        message,
        snapshot.staged.len()
    );
    Ok(Interpretation::act(Action::Commit { message }, response))
}

fn checkout(snapshot: &Snapshot, target: CheckoutTarget) -> Plan {
    match target {
        CheckoutTarget::Missing => Err(CommandError::CheckoutUsage),
        CheckoutTarget::NewBranch(name) => {
            let branch = new_branch_name(snapshot, &name)?;
            Ok(Interpretation::ok(
                vec![
                    Action::CreateBranch {
                        name: branch.clone(),
                        from: None,
                    },
                    Action::Checkout { branch },
                ],
                format!("Switched to a new branch '{}'", name),
            ))
        }
        CheckoutTarget::Existing(target) => {
            if let Some(branch) = snapshot.branch(&target) {
                if snapshot.is_current(&target) {
                    return Ok(Interpretation::say(format!("Already on '{}'", target)));
                }
                return Ok(Interpretation::act(
                    Action::Checkout {
                        branch: branch.name.clone(),
                    },
                    format!("Switched to branch '{}'", target),
                ));
            }

            if snapshot.resolve_prefix(&target).is_some() {
                return Ok(Interpretation::act(
                    Action::CheckoutCommit {
                        prefix: target.clone(),
                    },
                    format!(
                        "Note: switching to '{}'.\n\nYou are in 'detached HEAD' state.",
                        target
                    ),
                ));
            }

            Err(CommandError::UnknownRevision(target))
        }
    }
}

fn merge(snapshot: &Snapshot, branch: Option<String>) -> Plan {
    let name = branch.ok_or(CommandError::MergeUsage)?;
    let source = snapshot
        .branch(&name)
        .ok_or_else(|| CommandError::NotMergeable(name.clone()))?;

    if snapshot.is_current(&name) {
        return Ok(Interpretation::say(format!("Already on '{}'", name)));
    }
    if source.commit.is_none() {
        return Err(CommandError::NotMergeable(name));
    }
    if snapshot.head.is_none() {
        return Err(CommandError::NoCommitsYet);
    }

    Ok(Interpretation::act(
        Action::Merge {
            branch: source.name.clone(),
        },
        "Merge made by the 'recursive' strategy.",
    ))
}

fn touch(file: Option<String>) -> Plan {
    let name = file.ok_or(CommandError::TouchUsage)?;
    let file = file_name("touch", &name)?;
    Ok(Interpretation::act(
        Action::CreateFile { name: file },
        format!("Created file: {}", name),
    ))
}

fn echo_redirect(snapshot: &Snapshot, name: &str) -> Plan {
    let file = file_name("echo", name)?;

    if snapshot.working_file(name).is_some() {
        Ok(Interpretation::act(
            Action::ModifyFile { name: file },
            format!("Modified file: {}", name),
        ))
    } else if snapshot.staged_file(name).is_some() {
        Ok(Interpretation::say(format!("Modified file: {}", name)))
    } else {
        Ok(Interpretation::act(
            Action::CreateFile { name: file },
            format!("Created file: {}", name),
        ))
    }
}

/// Validate a name for a branch that must not exist yet.
fn new_branch_name(snapshot: &Snapshot, name: &str) -> Result<BranchName, CommandError> {
    if snapshot.branch(name).is_some() {
        return Err(CommandError::BranchExists(name.to_string()));
    }
    BranchName::new(name).map_err(|_| CommandError::InvalidBranchName(name.to_string()))
}

fn file_name(command: &'static str, name: &str) -> Result<FileName, CommandError> {
    FileName::new(name).map_err(|_| CommandError::InvalidFileName {
        command,
        name: name.to_string(),
    })
}
