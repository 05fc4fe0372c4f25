//! Handler for the `demo` command.
//!
//! Registers a parcel, lists the client's parcels, changes the address,
//! marks the parcel sent and then tries to delete it. The last step is
//! expected to be refused because the parcel is no longer registered.
//! Failures of the mutation steps are reported and the walkthrough carries on.

use super::command::DemoArgs;
use super::output;
use super::parcel::print_parcels;
use crate::application::parcel::ParcelStore;
use crate::domain::ParcelStatus;
use crate::error::Result;
use crate::port::outbound::store::ParcelRepository;

const FIRST_ADDRESS: &str = "123 Main St";
const SECOND_ADDRESS: &str = "456 Elm St";

/// Execute the demo walkthrough.
pub async fn execute<R: ParcelRepository>(store: &ParcelStore<R>, args: &DemoArgs) -> Result<()> {
    let number = store.register(args.client, FIRST_ADDRESS).await?;
    output::success(&format!("Registered parcel with number {number}"));

    let parcels = store.list_by_client(args.client).await?;
    print_parcels(args.client, &parcels)?;

    match store.set_address(number, SECOND_ADDRESS).await {
        Ok(()) => output::success("Updated address"),
        Err(e) => output::warning(&format!("Error updating address: {e}")),
    }

    match store.set_status(number, ParcelStatus::Sent).await {
        Ok(()) => output::success("Updated status to sent"),
        Err(e) => output::warning(&format!("Error updating status: {e}")),
    }

    match store.delete(number).await {
        Ok(()) => output::success("Deleted parcel"),
        Err(e) => output::warning(&format!("Error deleting parcel: {e}")),
    }

    Ok(())
}
