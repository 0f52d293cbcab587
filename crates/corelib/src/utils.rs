use heapless::IndexSet;
use nohash_hasher::BuildNoHashHasher;

pub(crate) type EnumSet<T, const N: usize> = IndexSet<T, BuildNoHashHasher<T>, N>;
