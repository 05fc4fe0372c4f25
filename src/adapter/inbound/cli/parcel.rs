//! Handlers for the parcel subcommands.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::{ListArgs, ParcelArg, RegisterArgs, SetAddressArgs, SetStatusArgs};
use super::output;
use crate::application::parcel::ParcelStore;
use crate::domain::{ClientId, Parcel};
use crate::error::Result;
use crate::port::outbound::store::ParcelRepository;

#[derive(Tabled)]
struct ParcelRow {
    #[tabled(rename = "Number")]
    number: i64,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Parcel> for ParcelRow {
    fn from(parcel: &Parcel) -> Self {
        Self {
            number: parcel.number.get(),
            status: parcel.status.as_str(),
            address: parcel.address.clone(),
            created_at: parcel.created_at.to_rfc3339(),
        }
    }
}

/// Render one parcel as labeled fields (or a `parcel` JSON record).
pub fn print_parcel(parcel: &Parcel) -> Result<()> {
    if output::is_json() {
        output::record("parcel", serde_json::to_value(parcel)?);
        return Ok(());
    }

    output::section(&format!("Parcel {}", parcel.number));
    output::field("Client", parcel.client);
    output::field("Status", output::highlight(parcel.status));
    output::field("Address", &parcel.address);
    output::field("Created", parcel.created_at.to_rfc3339());
    Ok(())
}

/// Render a client's parcels as a table (or a `parcels` JSON record).
pub fn print_parcels(client: ClientId, parcels: &[Parcel]) -> Result<()> {
    if output::is_json() {
        output::record(
            "parcels",
            json!({
                "client": client,
                "parcels": serde_json::to_value(parcels)?,
            }),
        );
        return Ok(());
    }

    output::section(&format!("Parcels for client {client}"));
    if parcels.is_empty() {
        output::field("Count", output::muted("none"));
        return Ok(());
    }
    let table = Table::new(parcels.iter().map(ParcelRow::from)).to_string();
    output::lines(&table);
    Ok(())
}

/// Execute `register`.
pub async fn register<R: ParcelRepository>(
    store: &ParcelStore<R>,
    args: &RegisterArgs,
) -> Result<()> {
    let number = store.register(args.client, &args.address).await?;
    if output::is_json() {
        output::record(
            "registered",
            json!({ "number": number, "client": args.client }),
        );
    } else {
        output::success(&format!("Registered parcel {}", output::highlight(number)));
    }
    Ok(())
}

/// Execute `show`.
pub async fn show<R: ParcelRepository>(store: &ParcelStore<R>, args: &ParcelArg) -> Result<()> {
    let parcel = store.get(args.number).await?;
    print_parcel(&parcel)
}

/// Execute `list`.
pub async fn list<R: ParcelRepository>(store: &ParcelStore<R>, args: &ListArgs) -> Result<()> {
    let parcels = store.list_by_client(args.client).await?;
    print_parcels(args.client, &parcels)
}

/// Execute `set-status`.
pub async fn set_status<R: ParcelRepository>(
    store: &ParcelStore<R>,
    args: &SetStatusArgs,
) -> Result<()> {
    store.set_status(args.number, args.status).await?;
    output::success(&format!(
        "Parcel {} is now {}",
        args.number,
        output::highlight(args.status)
    ));
    Ok(())
}

/// Execute `set-address`.
pub async fn set_address<R: ParcelRepository>(
    store: &ParcelStore<R>,
    args: &SetAddressArgs,
) -> Result<()> {
    store.set_address(args.number, &args.address).await?;
    output::success(&format!("Updated address of parcel {}", args.number));
    Ok(())
}

/// Execute `delete`.
pub async fn delete<R: ParcelRepository>(store: &ParcelStore<R>, args: &ParcelArg) -> Result<()> {
    store.delete(args.number).await?;
    output::success(&format!("Deleted parcel {}", args.number));
    Ok(())
}
