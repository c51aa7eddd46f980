//! 泛型实体存储
//!
//! 保存顺序即插入顺序；所有读取返回记录的克隆，调用方修改克隆
//! 不会影响存储内容。

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// 可存储实体
///
/// 每个实体有稳定的主键和 `updated_at` 时间戳。
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: PartialEq + Clone + Send + Sync;

    fn id(&self) -> Self::Id;

    /// 写操作成功后刷新 `updated_at`
    fn touch(&mut self, now: DateTime<Utc>);
}

/// 单类实体的内存存储
///
/// 写操作在 `RwLock` 写锁下串行执行；需要检查再写入的复合操作
/// (如房间号唯一性) 使用 [`EntityStore::with_records`] 在同一把
/// 锁下完成，避免检查与写入之间被穿插。
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn with_initial(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// 所有记录，按插入顺序
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: &T::Id) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == *id)
            .cloned()
    }

    /// 第一条满足谓词的记录
    pub async fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.records.read().await.iter().find(|r| pred(r)).cloned()
    }

    pub async fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.records.read().await.iter().any(|r| pred(r))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// 追加一条记录，返回其克隆
    pub async fn insert(&self, record: T) -> T {
        let mut records = self.records.write().await;
        records.push(record.clone());
        record
    }

    /// 对指定记录应用补丁并刷新 `updated_at`
    ///
    /// 返回更新后的记录；记录不存在时返回 `None`。空补丁也会刷新
    /// `updated_at` 并算作成功更新。
    pub async fn update_with(
        &self,
        id: &T::Id,
        patch: impl FnOnce(&mut T),
    ) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id() == *id)?;
        patch(record);
        record.touch(Utc::now());
        Some(record.clone())
    }

    /// 删除指定记录，返回是否存在
    pub async fn remove(&self, id: &T::Id) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != *id);
        records.len() != before
    }

    /// 在写锁下执行复合操作
    ///
    /// 用于需要原子的检查再写入 (唯一性校验等)。闭包内不要做 IO。
    pub async fn with_records<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut records = self.records.write().await;
        f(&mut records)
    }
}

/// 单调递增的数字主键生成器
///
/// 进程内唯一；不持久化，重启后从种子起点重新开始。
#[derive(Debug)]
pub struct IdGen {
    next: AtomicI64,
}

impl IdGen {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
