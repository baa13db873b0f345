use tokio::sync::{mpsc, oneshot};
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, warn};

use crate::engine::{Ledger, LedgerError};
use crate::models::Account;
use crate::query::{Filter, Statement};
use crate::storage::AccountStore;
use crate::types::Amount;

const COMMAND_BACKLOG: usize = 256;

type Reply<T> = oneshot::Sender<Result<T, LedgerError>>;

enum Command {
    Open { account: Account, reply: Reply<()> },
    Seed { reply: Reply<usize> },
    Deposit { name: String, amount: Amount, reply: Reply<Account> },
    Withdraw { name: String, amount: Amount, reply: Reply<Account> },
    Transfer { from: String, amount: Amount, to: String, reply: Reply<(Account, Account)> },
    Statement { name: String, filter: Filter, reply: Reply<Statement> },
    Accounts { reply: Reply<Vec<Account>> }
}

/// Owns a [`Ledger`] on a blocking worker and runs its commands one at a time.
///
/// Every load, mutate, write cycle finishes before the next one starts, so
/// callers sharing an actor cannot overwrite each other's updates.
pub struct LedgerActor {
    sender: mpsc::Sender<Command>,
    handle: JoinHandle<()>
}

impl LedgerActor {
    /// Spawns the worker. Must be called from within a tokio runtime.
    pub fn spawn<S: AccountStore>(ledger: Ledger<S>) -> Self {
        let (sender, mut receiver) = mpsc::channel(COMMAND_BACKLOG);

        let handle = spawn_blocking(move || {
            while let Some(command) = receiver.blocking_recv() {
                execute(&ledger, command);
            }

            debug!("Ledger actor drained its queue");
        });

        Self { sender, handle }
    }

    pub async fn open(&self, account: Account) -> Result<(), LedgerError> {
        self.request(|reply| Command::Open { account, reply }).await
    }

    pub async fn seed(&self) -> Result<usize, LedgerError> {
        self.request(|reply| Command::Seed { reply }).await
    }

    pub async fn deposit(&self, name: &str, amount: Amount) -> Result<Account, LedgerError> {
        self.request(|reply| Command::Deposit { name: name.to_string(), amount, reply }).await
    }

    pub async fn withdraw(&self, name: &str, amount: Amount) -> Result<Account, LedgerError> {
        self.request(|reply| Command::Withdraw { name: name.to_string(), amount, reply }).await
    }

    pub async fn transfer(&self, from: &str, amount: Amount, to: &str) -> Result<(Account, Account), LedgerError> {
        self.request(|reply| Command::Transfer { from: from.to_string(), amount, to: to.to_string(), reply }).await
    }

    pub async fn statement(&self, name: &str, filter: Filter) -> Result<Statement, LedgerError> {
        self.request(|reply| Command::Statement { name: name.to_string(), filter, reply }).await
    }

    pub async fn accounts(&self) -> Result<Vec<Account>, LedgerError> {
        self.request(|reply| Command::Accounts { reply }).await
    }

    /// Closes the queue and waits for the worker to finish what it already accepted.
    pub async fn despawn(self) -> anyhow::Result<()> {
        drop(self.sender);
        self.handle.await?;

        Ok(())
    }

    async fn request<T, F>(&self, build: F) -> Result<T, LedgerError>
    where
        F: FnOnce(Reply<T>) -> Command
    {
        let (reply, response) = oneshot::channel();

        self.sender.send(build(reply)).await
            .map_err(|_| LedgerError::ServiceUnavailable)?;

        response.await.map_err(|_| LedgerError::ServiceUnavailable)?
    }
}

fn execute<S: AccountStore>(ledger: &Ledger<S>, command: Command) {
    match command {
        Command::Open { account, reply } => respond(reply, ledger.open(account)),
        Command::Seed { reply } => respond(reply, ledger.seed()),
        Command::Deposit { name, amount, reply } => respond(reply, ledger.deposit_to(&name, amount)),
        Command::Withdraw { name, amount, reply } => respond(reply, ledger.withdraw_from(&name, amount)),
        Command::Transfer { from, amount, to, reply } => respond(reply, ledger.transfer_between(&from, amount, &to)),
        Command::Statement { name, filter, reply } => respond(reply, ledger.statement_of(&name, &filter)),
        Command::Accounts { reply } => respond(reply, ledger.accounts())
    }
}

fn respond<T>(reply: Reply<T>, result: Result<T, LedgerError>) {
    if let Err(error) = &result {
        warn!("{error}");
    }

    //NOTE: The caller may have stopped waiting; the operation has already been applied either way
    let _ = reply.send(result);
}
