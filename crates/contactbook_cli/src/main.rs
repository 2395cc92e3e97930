//! Text front end for the contact book.
//!
//! # Responsibility
//! - Map subcommands onto core view controllers.
//! - Render view state as plain text on stdout.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use contactbook_core::view::{
    confirm_delete, submit_edit, AddForm, DetailQuery, DetailView, EditForm, ListView,
};
use contactbook_core::{
    default_log_level, init_logging, open_contact_book, BookConfig, Contact, ContactId, RepoError,
    SqliteContactRepository,
};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "Local contact book")]
struct Cli {
    /// Directory holding the database and the default seed document.
    #[arg(long, env = "CONTACTBOOK_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Seed document, relative to the data directory unless absolute.
    #[arg(long, env = "CONTACTBOOK_SEED", default_value = "contacts.json")]
    seed: PathBuf,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "CONTACTBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Write rolling logs here. Logging stays off when unset.
    #[arg(long, env = "CONTACTBOOK_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List contacts, optionally filtered by a search term.
    List {
        query: Option<String>,
    },
    /// Show one contact.
    Show(ShowArgs),
    /// Add a contact.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        favorite: bool,
    },
    /// Edit name, email or phone of a contact.
    Edit {
        id: ContactId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a contact.
    Delete {
        id: ContactId,
    },
}

#[derive(Debug, Args)]
struct ShowArgs {
    #[arg(conflicts_with = "query")]
    id: Option<ContactId>,
    /// Open with the edit form visible.
    #[arg(long, conflicts_with = "query")]
    edit: bool,
    /// Raw navigation query, e.g. `id=3&edit=true`.
    #[arg(long)]
    query: Option<String>,
}

impl ShowArgs {
    fn detail_query(&self) -> DetailQuery {
        match &self.query {
            Some(raw) => DetailQuery::parse(raw),
            None => DetailQuery {
                id: self.id.filter(|id| *id != 0),
                edit: self.edit,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    std::fs::create_dir_all(&cli.data_dir)
        .with_context(|| format!("failed to create data dir `{}`", cli.data_dir.display()))?;
    let config = BookConfig::new(&cli.data_dir).with_seed_path(&cli.seed);
    let mut repo = open_contact_book(&config)
        .with_context(|| format!("failed to open `{}`", config.db_path().display()))?;
    info!("event=cli_start module=cli status=ok count={}", repo.len());

    run(cli.command, &mut repo)
}

fn run(command: Command, repo: &mut SqliteContactRepository) -> Result<()> {
    match command {
        Command::List { query } => {
            print!("{}", render_list(&ListView::build(&*repo, query.as_deref().unwrap_or(""))));
        }
        Command::Show(args) => {
            print!("{}", render_detail(&DetailView::load(&*repo, &args.detail_query())));
        }
        Command::Add {
            name,
            email,
            phone,
            favorite,
        } => {
            let form = AddForm {
                name,
                email,
                phone,
                favorite,
            };
            let outcome = form.submit(repo).map_err(user_error)?;
            println!("{}", outcome.message);
            println!("id: {}", outcome.contact.id);
        }
        Command::Edit {
            id,
            name,
            email,
            phone,
        } => {
            let Some(current) = repo.find_by_id(id) else {
                bail!("contact {id} not found");
            };
            let current = EditForm::from_contact(current);
            let form = EditForm {
                name: name.unwrap_or(current.name),
                email: email.unwrap_or(current.email),
                phone: phone.unwrap_or(current.phone),
            };
            let updated = submit_edit(repo, id, form).map_err(user_error)?;
            println!("Contact updated.");
            print!("{}", render_contact(&updated));
        }
        Command::Delete { id } => {
            let outcome = confirm_delete(repo, id).map_err(user_error)?;
            println!("{}", outcome.message);
        }
    }
    Ok(())
}

fn user_error(err: RepoError) -> anyhow::Error {
    match err {
        RepoError::Validation(validation) => anyhow::anyhow!("{}", validation.reason()),
        other => anyhow::Error::new(other),
    }
}

fn render_list(view: &ListView) -> String {
    let mut out = format!("Contacts: {}\n", view.count());
    if let Some(empty) = &view.empty {
        out.push_str(&empty.message());
        out.push('\n');
        return out;
    }
    for row in &view.rows {
        out.push_str(&format!(
            "{:>4}  {:<24} {:<32} {}\n",
            row.contact.id, row.contact.name, row.contact.email, row.contact.phone
        ));
    }
    out
}

fn render_detail(view: &DetailView) -> String {
    match view {
        DetailView::Found {
            contact,
            edit_mode,
            form,
        } => {
            let mut out = render_contact(contact);
            if *edit_mode {
                out.push_str(&format!(
                    "\nEdit with: contactbook edit {} [--name] [--email] [--phone]\n  name:  {}\n  email: {}\n  phone: {}\n",
                    contact.id, form.name, form.email, form.phone
                ));
            }
            out
        }
        other => format!("{}\n", other.message().unwrap_or_default()),
    }
}

fn render_contact(contact: &Contact) -> String {
    let mut out = format!(
        "{}\n  Email: {}\n  Phone: {}\n  ID:    {}\n",
        contact.name, contact.email, contact.phone, contact.id
    );
    if contact.is_favorite() {
        out.push_str("  Favorite\n");
    }
    out
}
