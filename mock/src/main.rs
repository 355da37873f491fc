#![doc(hidden)]

//! A proof-of-concept for a block commitment, mocking the client/server parts.
//!
//! The client commits to a block of transactions with its root hash only, then checks every transaction it gets back
//! from the server against that root hash.

use std::fmt::LowerHex;

use clap::{Parser, ValueEnum};
use merkle::{build_proofs, hash_items, Hasher, Proof};
use tracing::{info, warn, Level};

#[cfg(test)]
mod tests;

const DATA: [&str; 5] = [
    "alice sends 10 coins to bob",
    "bob sends 3 coins to carol",
    "carol sends 1 coin to dave",
    "dave sends 7 coins to alice",
    "erin joins the network",
];

type Transaction = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Sha256,
    Sha1,
    Md5,
}

#[derive(Debug, Parser)]
#[command(name = "mock", about = "Commit to a block of transactions and check them back with inclusion proofs")]
struct Args {
    /// Hash algorithm backing the hash tree
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    /// Index of the transaction the server corrupts
    #[arg(short, long, default_value_t = 2)]
    corrupt: usize,

    /// Enable debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum MockError {
    #[error("transaction #{0} not found")]
    NotFound(usize),
    #[error("no block committed yet")]
    NoCommitment,
    #[error("transaction #{index} is corrupted: {source}")]
    Corrupted { index: usize, source: merkle::Error },
}

struct Server<H: Hasher> {
    transactions: Vec<Transaction>,
    proofs: Vec<Proof<H>>,
}

impl<H: Hasher> Default for Server<H> {
    fn default() -> Self {
        Self { transactions: Vec::new(), proofs: Vec::new() }
    }
}

impl<H: Hasher> Server<H> {
    async fn upload_block(&mut self, transactions: Vec<Transaction>) -> H::Hash {
        let (root_hash, proofs) = build_proofs::<H>(&transactions);

        self.transactions = transactions;
        self.proofs = proofs;

        root_hash
    }

    async fn download_transaction(&self, index: usize) -> Result<(Transaction, Proof<H>), MockError> {
        match (self.transactions.get(index), self.proofs.get(index)) {
            (Some(transaction), Some(proof)) => Ok((transaction.clone(), proof.clone())),
            _ => Err(MockError::NotFound(index)),
        }
    }

    fn alter_transaction(&mut self, index: usize) {
        if let Some(transaction) = self.transactions.get_mut(index) {
            *transaction = transaction
                .chars()
                .map(|c| match c {
                    _ if c.is_ascii_lowercase() => c.to_ascii_uppercase(),
                    _ if c.is_ascii_uppercase() => c.to_ascii_lowercase(),
                    _ => c,
                })
                .collect();

            warn!(index, "transaction got corrupted on server side");
        }
    }
}

struct Client<H: Hasher> {
    root_hash: Option<H::Hash>,
}

impl<H: Hasher> Default for Client<H> {
    fn default() -> Self {
        Self { root_hash: None }
    }
}

impl<H: Hasher> Client<H>
where
    H::Hash: LowerHex,
{
    async fn commit_block(&mut self, server: &mut Server<H>, transactions: &[Transaction]) {
        let root_hash = hash_items::<H>(transactions);
        let server_root_hash = server.upload_block(transactions.to_vec()).await;

        if server_root_hash != root_hash {
            warn!(client = %format!("{root_hash:x}"), server = %format!("{server_root_hash:x}"), "root hashes differ");
        }

        info!(root_hash = %format!("{root_hash:x}"), "block committed");
        self.root_hash = Some(root_hash);
    }

    async fn fetch_transaction(&self, server: &Server<H>, index: usize) -> Result<Transaction, MockError> {
        let (transaction, proof) = server.download_transaction(index).await?;

        self.check_transaction(&transaction, &proof)?;

        Ok(transaction)
    }

    fn check_transaction(&self, transaction: &Transaction, proof: &Proof<H>) -> Result<(), MockError> {
        let root_hash = self.root_hash.as_ref().ok_or(MockError::NoCommitment)?;

        proof
            .verify(root_hash, transaction)
            .map_err(|source| MockError::Corrupted { index: proof.index, source })
    }
}

async fn run<H: Hasher>(corrupted_index: usize) -> anyhow::Result<()>
where
    H::Hash: LowerHex,
{
    let mut server = Server::<H>::default();
    let mut client = Client::<H>::default();

    let transactions: Vec<Transaction> = DATA.map(Transaction::from).into();

    info!(count = transactions.len(), "committing block...");
    client.commit_block(&mut server, &transactions).await;

    server.alter_transaction(corrupted_index);

    let mut corrupted = 0;

    for index in 0..transactions.len() + 1 {
        match client.fetch_transaction(&server, index).await {
            Ok(transaction) => info!(index, %transaction, "transaction verified"),
            Err(err) => {
                warn!(index, %err, "transaction rejected");
                corrupted += usize::from(matches!(err, MockError::Corrupted { .. }));
            }
        }
    }

    anyhow::ensure!(
        corrupted == usize::from(corrupted_index < transactions.len()),
        "{corrupted} transaction(s) detected as corrupted"
    );

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!(algorithm = ?args.algorithm, "starting mock");

    match args.algorithm {
        Algorithm::Sha256 => run::<sha2::Sha256>(args.corrupt).await,
        Algorithm::Sha1 => run::<sha1::Sha1>(args.corrupt).await,
        Algorithm::Md5 => run::<md5::Md5>(args.corrupt).await,
    }
}
