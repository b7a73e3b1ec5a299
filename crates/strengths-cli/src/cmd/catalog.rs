use crate::output::{print_json, print_table};
use clap::Subcommand;
use serde_json::json;
use strengths_core::catalog::{self, Strength};
use strengths_core::display::domain_color;
use strengths_core::StrengthDomain;

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// List every strength, grouped by domain
    List {
        /// Only this domain (e.g. executing, relationship-building)
        #[arg(long)]
        domain: Option<String>,
    },

    /// Show one strength
    Show { name: String },

    /// Print the domain of each name (unknown names get the fallback domain)
    Domain {
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },
}

pub fn run(subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CatalogSubcommand::List { domain } => list(domain.as_deref(), json),
        CatalogSubcommand::Show { name } => show(&name, json),
        CatalogSubcommand::Domain { names } => domains(&names, json),
    }
}

fn entry_json(s: &Strength) -> serde_json::Value {
    json!({
        "name": s.name,
        "domain": s.domain,
        "color": s.domain.color(),
        "summary": s.summary,
    })
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn list(domain: Option<&str>, json: bool) -> anyhow::Result<()> {
    let domains: Vec<StrengthDomain> = match domain {
        Some(d) => vec![d.parse()?],
        None => StrengthDomain::all().to_vec(),
    };

    if json {
        let entries: Vec<serde_json::Value> = domains
            .iter()
            .flat_map(|&d| catalog::by_domain(d))
            .map(entry_json)
            .collect();
        return print_json(&entries);
    }

    for (i, &d) in domains.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{d} ({}): {}", d.color(), d.description());
        let rows = catalog::by_domain(d)
            .map(|s| vec![s.name.to_string(), s.summary.to_string()])
            .collect();
        print_table(&["STRENGTH", "SUMMARY"], rows);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(name: &str, json: bool) -> anyhow::Result<()> {
    let Some(entry) = catalog::lookup(name) else {
        anyhow::bail!("unknown strength '{name}'; run 'strengths catalog list' for the full list");
    };

    if json {
        return print_json(&entry_json(entry));
    }
    println!("{}", entry.name);
    println!("Domain:  {} ({})", entry.domain, entry.domain.color());
    println!("{}", entry.summary);
    Ok(())
}

// ---------------------------------------------------------------------------
// domain
// ---------------------------------------------------------------------------

fn domains(names: &[String], json: bool) -> anyhow::Result<()> {
    let resolved: Vec<(String, StrengthDomain, bool)> = names
        .iter()
        .map(|n| (n.clone(), catalog::domain_of(n), catalog::is_known(n)))
        .collect();

    if json {
        let entries: Vec<serde_json::Value> = resolved
            .iter()
            .map(|(name, domain, known)| {
                json!({
                    "name": name,
                    "domain": domain,
                    "color": domain_color(domain.as_str()),
                    "known": known,
                })
            })
            .collect();
        return print_json(&entries);
    }

    let rows = resolved
        .into_iter()
        .map(|(name, domain, known)| {
            let note = if known { "" } else { "not in catalog" };
            vec![name, domain.to_string(), note.to_string()]
        })
        .collect();
    print_table(&["NAME", "DOMAIN", "NOTE"], rows);
    Ok(())
}
