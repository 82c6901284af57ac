use anyhow::Result;
use clap::Subcommand;

use ruledeck_client::RuleClient;
use ruledeck_common::Rule;

use super::helpers;
use crate::output::{confirm, print_json, print_success, rule_table, spinner, OutputMode};
use crate::reconciler::{DraftField, Reconciler};

#[derive(Subcommand)]
pub enum RulesCmd {
    List,
    Create(CreateArgs),
    Update(UpdateArgs),
    Delete(DeleteArgs),
}

#[derive(clap::Args)]
pub struct CreateArgs {
    #[arg(long, help = "Operator-assigned rule ID")]
    id: String,
    #[arg(long, help = "Condition expression, e.g. \"temp > 40\"")]
    condition: String,
    #[arg(long, help = "Action expression, e.g. \"alert('High Temp')\"")]
    action: String,
}

#[derive(clap::Args)]
pub struct UpdateArgs {
    #[arg(help = "Rule ID")]
    id: String,
    #[arg(long, help = "New condition expression")]
    condition: Option<String>,
    #[arg(long, help = "New action expression")]
    action: Option<String>,
}

#[derive(clap::Args)]
pub struct DeleteArgs {
    #[arg(help = "Rule ID")]
    id: String,
    #[arg(long, help = "Skip confirmation prompt")]
    yes: bool,
}

pub async fn execute(
    cmd: RulesCmd,
    mode: OutputMode,
    server: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let cfg = helpers::resolve_config(server.as_deref(), config_path.as_deref())?;
    let mut rec = Reconciler::new(RuleClient::new(&cfg.server));

    match cmd {
        RulesCmd::List => list(&mut rec, mode).await,
        RulesCmd::Create(args) => create(&mut rec, args, mode).await,
        RulesCmd::Update(args) => update(&mut rec, args, mode).await,
        RulesCmd::Delete(args) => delete(&mut rec, args, mode).await,
    }
}

async fn list(rec: &mut Reconciler, mode: OutputMode) -> Result<()> {
    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Fetching rules...")),
        OutputMode::Json => None,
    };

    rec.load().await;

    if let Some(sp) = sp {
        spinner::finish_clear(&sp);
    }

    let rules = rec.table().rules();
    match mode {
        OutputMode::Json => print_json(&rules)?,
        OutputMode::Human => {
            if rules.is_empty() {
                print_success("No rules found");
            } else {
                println!("{}", rule_table(rules));
            }
        }
    }

    Ok(())
}

async fn create(rec: &mut Reconciler, args: CreateArgs, mode: OutputMode) -> Result<()> {
    let rule = Rule {
        id: args.id,
        condition: args.condition,
        action: args.action,
    };
    rule.validate()?;

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Creating rule...")),
        OutputMode::Json => None,
    };

    match rec.create(&rule).await {
        Ok(()) => {
            if let Some(sp) = sp {
                spinner::finish_ok(&sp, &format!("Rule '{}' created", rule.id));
            }
        }
        Err(e) => {
            if let Some(sp) = sp {
                spinner::finish_err(&sp, "Create failed");
            }
            anyhow::bail!("create rejected: {e}");
        }
    }

    if mode == OutputMode::Json {
        print_json(&serde_json::json!({"created": true, "id": rule.id}))?;
    }

    Ok(())
}

async fn update(rec: &mut Reconciler, args: UpdateArgs, mode: OutputMode) -> Result<()> {
    if args.condition.is_none() && args.action.is_none() {
        anyhow::bail!("nothing to update: pass --condition and/or --action");
    }

    rec.load().await;
    if !rec.table_mut().begin_edit(&args.id) {
        anyhow::bail!("no rule with id '{}'", args.id);
    }
    if let Some(condition) = &args.condition {
        rec.table_mut().update_draft(DraftField::Condition, condition);
    }
    if let Some(action) = &args.action {
        rec.table_mut().update_draft(DraftField::Action, action);
    }
    if let Some(payload) = rec.table().commit_payload() {
        payload.validate()?;
    }

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Saving rule...")),
        OutputMode::Json => None,
    };

    match rec.commit_edit().await {
        Ok(_) => {
            if let Some(sp) = sp {
                spinner::finish_ok(&sp, &format!("Rule '{}' updated", args.id));
            }
        }
        Err(e) => {
            if let Some(sp) = sp {
                spinner::finish_err(&sp, "Save failed, rule left unchanged");
            }
            anyhow::bail!("update rejected: {e}");
        }
    }

    if mode == OutputMode::Json {
        print_json(&serde_json::json!({"updated": true, "id": args.id}))?;
    }

    Ok(())
}

async fn delete(rec: &mut Reconciler, args: DeleteArgs, mode: OutputMode) -> Result<()> {
    rec.load().await;
    if !rec.table_mut().request_remove(&args.id) {
        anyhow::bail!("no rule with id '{}'", args.id);
    }

    let confirmed = args.yes || {
        mode == OutputMode::Human && confirm::confirm_action(&format!("Delete rule '{}'?", args.id))
    };
    if !confirmed {
        rec.table_mut().cancel_remove();
        println!("  Cancelled.");
        return Ok(());
    }

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Deleting rule...")),
        OutputMode::Json => None,
    };

    match rec.remove_confirmed().await {
        Ok(_) => {
            if let Some(sp) = sp {
                spinner::finish_ok(&sp, &format!("Rule '{}' deleted", args.id));
            }
        }
        Err(e) => {
            if let Some(sp) = sp {
                spinner::finish_err(&sp, "Delete failed, rule left in place");
            }
            anyhow::bail!("delete rejected: {e}");
        }
    }

    if mode == OutputMode::Json {
        print_json(&serde_json::json!({"deleted": true, "id": args.id}))?;
    }

    Ok(())
}
