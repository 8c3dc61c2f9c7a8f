use crate::domain::{StorageResult, Transaction, User};
use std::fs;
use std::path::PathBuf;

/// Fixed key for the single persisted account holder.
pub const USER_KEY: &str = "bank_user";
/// Fixed key for the append-only transaction list.
pub const TRANSACTIONS_KEY: &str = "bank_transactions";

/// Device-local storage for the one user record and its transactions.
pub trait Storage {
    fn load_user(&self) -> StorageResult<Option<User>>;
    fn save_user(&mut self, user: &User) -> StorageResult<()>;
    /// All transactions in insertion order.
    fn transactions(&self) -> StorageResult<Vec<Transaction>>;
    fn append_transaction(&mut self, tx: &Transaction) -> StorageResult<()>;
    /// Removes the user and every transaction.
    fn clear(&mut self) -> StorageResult<()>;
}

/// Stores each key as a pretty-printed JSON file inside a directory.
pub struct FileRepository {
    dir: PathBuf,
}

impl FileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(key), json)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

impl Storage for FileRepository {
    fn load_user(&self) -> StorageResult<Option<User>> {
        self.read(USER_KEY)
    }

    fn save_user(&mut self, user: &User) -> StorageResult<()> {
        self.write(USER_KEY, user)
    }

    fn transactions(&self) -> StorageResult<Vec<Transaction>> {
        Ok(self.read(TRANSACTIONS_KEY)?.unwrap_or_default())
    }

    fn append_transaction(&mut self, tx: &Transaction) -> StorageResult<()> {
        let mut all = self.transactions()?;
        all.push(tx.clone());
        self.write(TRANSACTIONS_KEY, &all)
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.remove(USER_KEY)?;
        self.remove(TRANSACTIONS_KEY)
    }
}

/// Volatile storage, used when no data directory is wanted and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    user: Option<User>,
    transactions: Vec<Transaction>,
}

impl Storage for MemoryRepository {
    fn load_user(&self) -> StorageResult<Option<User>> {
        Ok(self.user.clone())
    }

    fn save_user(&mut self, user: &User) -> StorageResult<()> {
        self.user = Some(user.clone());
        Ok(())
    }

    fn transactions(&self) -> StorageResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn append_transaction(&mut self, tx: &Transaction) -> StorageResult<()> {
        self.transactions.push(tx.clone());
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.user = None;
        self.transactions.clear();
        Ok(())
    }
}
