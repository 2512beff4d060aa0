//! # Repository Provisioning
//!
//! The interactive flow behind a plain `repo-bridge` invocation:
//!
//! 1.  Ask whether this is a new project or an existing one.
//! 2.  **New**: ask for a repository name, ask whether to start from a
//!     template, pick the template if so, and create the repository.
//! 3.  **Existing**: pick one of the organization's non-template
//!     repositories.
//! 4.  Merge-clone the resolved repository into the working directory.
//!
//! Every external effect goes through `HostingPlatform`, `SourceControl` and
//! `Prompter`, so the whole sequence runs in tests against fakes. Any error
//! ends the flow immediately; nothing is retried.

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::merge::{merge_clone, MergeReport};
use crate::output::{OutputConfig, Status};
use crate::prompt::{Choice, Prompter};
use crate::repository::{
    HostingPlatform, RepositoryDescriptor, RepositoryId, RepositoryKind, SourceControl,
};

const PROJECT_TYPE_PROMPT: &str = "What are you working on?";
const NEW_PROJECT: &str = "New project";
const EXISTING_PROJECT: &str = "Existing project";
const NAME_PROMPT: &str = "Enter the new repository name:";
const TEMPLATE_PROMPT: &str = "Base this repository on a template?";
const USE_TEMPLATE: &str = "Yes (recommended)";
const NO_TEMPLATE: &str = "No";

/// Whether the user is starting something new or picking up existing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    New,
    Existing,
}

/// Result of a completed provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    /// The repository that was merged into the working directory.
    pub repository: RepositoryId,
    /// Whether the repository was created during this run.
    pub created: bool,
    /// Template the repository was created from, if any.
    pub template: Option<String>,
    pub report: MergeReport,
}

/// Validation rule for new repository names.
///
/// Only emptiness is checked; whether the platform accepts the name is found
/// out when the repository is created.
pub fn validate_repo_name(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        Err("Repository name cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Drives the prompt sequence and the calls it leads to.
pub struct Provisioner<'a> {
    platform: &'a dyn HostingPlatform,
    git: &'a dyn SourceControl,
    prompter: &'a dyn Prompter,
    output: &'a OutputConfig,
    host: String,
}

impl<'a> Provisioner<'a> {
    pub fn new(
        platform: &'a dyn HostingPlatform,
        git: &'a dyn SourceControl,
        prompter: &'a dyn Prompter,
        output: &'a OutputConfig,
        host: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            git,
            prompter,
            output,
            host: host.into(),
        }
    }

    /// Run the full flow, merging the chosen repository into `workdir`.
    pub fn run(&self, workdir: &Path) -> Result<Provisioned> {
        self.print_banner();

        let (name, created, template) = match self.ask_project_type()? {
            ProjectType::New => {
                let (name, template) = self.prepare_new()?;
                (name, true, template)
            }
            ProjectType::Existing => (self.prepare_existing()?, false, None),
        };

        let repository = RepositoryId::new(self.platform.org(), name);
        let report = self.clone_into(&repository, workdir)?;

        Ok(Provisioned {
            repository,
            created,
            template,
            report,
        })
    }

    fn print_banner(&self) {
        println!();
        println!(
            "{} The bridge between your local project and your organisation's Git",
            self.output.marker(Status::Welcome)
        );
        println!();
        println!(
            "{} Warning: if you select a template or existing repository to clone, its contents \
             will override any existing files and folders with matching names. For example, \
             cloning a repository that contains a 'plugins' folder will completely replace the \
             existing 'plugins' folder here.",
            self.output.marker(Status::Warning)
        );
        println!();
    }

    fn ask_project_type(&self) -> Result<ProjectType> {
        let choices = [
            Choice::new(NEW_PROJECT).with_description(
                "I'm starting a new project that doesn't exist yet in our organisation's Git",
            ),
            Choice::new(EXISTING_PROJECT).with_description(
                "I want to work on a project that already exists in our organisation's Git",
            ),
        ];
        let index = self.prompter.select(PROJECT_TYPE_PROMPT, &choices)?;
        Ok(if index == 0 {
            ProjectType::New
        } else {
            ProjectType::Existing
        })
    }

    /// Returns the new repository's name and the template it came from.
    fn prepare_new(&self) -> Result<(String, Option<String>)> {
        let name = self
            .prompter
            .text(NAME_PROMPT, &validate_repo_name)?
            .trim()
            .to_string();

        let choices = [
            Choice::new(USE_TEMPLATE).with_description("Start with an existing scaffold"),
            Choice::new(NO_TEMPLATE).with_description("Start from scratch"),
        ];
        let use_template = self.prompter.select(TEMPLATE_PROMPT, &choices)? == 0;

        let template = if use_template {
            let templates = self.fetch_repositories(RepositoryKind::Template)?;
            Some(self.pick_repository(RepositoryKind::Template, &templates)?)
        } else {
            None
        };

        self.create_repository(&name, template.as_deref())?;
        Ok((name, template))
    }

    fn prepare_existing(&self) -> Result<String> {
        let projects = self.fetch_repositories(RepositoryKind::Project)?;
        self.pick_repository(RepositoryKind::Project, &projects)
    }

    fn fetch_repositories(&self, kind: RepositoryKind) -> Result<Vec<RepositoryDescriptor>> {
        println!(
            "{} Fetching available {}...",
            self.output.marker(Status::Fetch),
            kind.plural()
        );
        let repositories = self.platform.list_repositories(kind)?;
        debug!("Found {} {} repositories", repositories.len(), kind);

        if repositories.is_empty() {
            return Err(Error::NoRepositories {
                kind,
                org: self.platform.org().to_string(),
            });
        }
        Ok(repositories)
    }

    fn pick_repository(
        &self,
        kind: RepositoryKind,
        repositories: &[RepositoryDescriptor],
    ) -> Result<String> {
        let choices: Vec<Choice> = repositories
            .iter()
            .map(|repo| Choice::new(repo.label()))
            .collect();
        let index = self
            .prompter
            .select(&format!("Select a {}:", kind), &choices)?;
        Ok(repositories[index].name.clone())
    }

    fn create_repository(&self, name: &str, template: Option<&str>) -> Result<()> {
        let org = self.platform.org();
        match template {
            Some(template) => println!(
                "{} Creating {}/{} from {}...",
                self.output.marker(Status::Create),
                org,
                name,
                template
            ),
            None => println!(
                "{} Creating {}/{} from blank slate...",
                self.output.marker(Status::Create),
                org,
                name
            ),
        }
        self.platform.create_repository(name, template)
    }

    fn clone_into(&self, repository: &RepositoryId, workdir: &Path) -> Result<MergeReport> {
        println!(
            "{} Cloning {} into {}...",
            self.output.marker(Status::Clone),
            repository,
            workdir.display()
        );
        let report = merge_clone(self.git, &repository.ssh_url(&self.host), workdir)?;

        for name in &report.overwritten {
            println!(
                "{} Overwrote existing {}",
                self.output.marker(Status::Overwrite),
                name
            );
        }
        println!(
            "{} {} merged: {} entries moved, {} overwritten",
            self.output.marker(Status::Done),
            repository,
            report.moved.len(),
            report.overwritten.len()
        );
        Ok(report)
    }
}
