use merkle::{hash_items, Error};

use assert_matches::assert_matches;
use hex_literal::hex;
use sha2::Sha256;

use crate::{Client, MockError, Server, Transaction, DATA};

fn transactions() -> Vec<Transaction> {
    DATA.map(Transaction::from).into()
}

#[test]
fn mock() {
    let root_hash = hash_items::<Sha256>(&DATA);

    assert_eq!(root_hash[..], hex!("0b3f2c9c6d9f9d9a4683f0a84d1f1516fd72ed7dd4708801c6c5d5defd5ed27a"));

    println!("{root_hash:x}");
}

#[tokio::test]
async fn fetch_transactions() {
    let mut server = Server::<Sha256>::default();
    let mut client = Client::<Sha256>::default();
    let transactions = transactions();

    client.commit_block(&mut server, &transactions).await;
    assert_eq!(client.root_hash, Some(hash_items::<Sha256>(&transactions)));

    for (index, transaction) in transactions.iter().enumerate() {
        assert_eq!(client.fetch_transaction(&server, index).await.as_ref(), Ok(transaction));
    }

    assert_eq!(client.fetch_transaction(&server, DATA.len()).await, Err(MockError::NotFound(DATA.len())));
}

#[tokio::test]
async fn corrupted_transaction() {
    let mut server = Server::<md5::Md5>::default();
    let mut client = Client::<md5::Md5>::default();

    client.commit_block(&mut server, &transactions()).await;
    server.alter_transaction(2);

    assert_matches!(
        client.fetch_transaction(&server, 2).await,
        Err(MockError::Corrupted { index: 2, source: Error::LeafMismatch { .. } })
    );
    assert!(client.fetch_transaction(&server, 3).await.is_ok());
}

#[tokio::test]
async fn no_commitment() {
    let mut server = Server::<Sha256>::default();
    let client = Client::<Sha256>::default();

    server.upload_block(transactions()).await;

    assert_eq!(client.fetch_transaction(&server, 0).await, Err(MockError::NoCommitment));
}

#[tokio::test]
async fn run_mock() {
    assert!(crate::run::<sha1::Sha1>(1).await.is_ok());
    assert!(crate::run::<Sha256>(DATA.len()).await.is_ok());
}
