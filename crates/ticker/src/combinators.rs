//! Feed combinators
//!
//! A minimal operator set over [`Feed`]: [`map`](FeedExt::map) to project
//! values and [`distinct`](FeedExt::distinct) to drop consecutive
//! duplicates. Both are cancel-safe as long as the inner feed is.

use async_trait::async_trait;
use clockface_ports::{Feed, FeedResult};
use std::marker::PhantomData;

/// Feed returned by [`FeedExt::map`]
pub struct Map<Fd, F, T> {
    inner: Fd,
    f: F,
    _input: PhantomData<fn(T)>,
}

impl<Fd, F, T> Map<Fd, F, T> {
    pub fn new(inner: Fd, f: F) -> Self {
        Self {
            inner,
            f,
            _input: PhantomData,
        }
    }

    pub fn into_inner(self) -> Fd {
        self.inner
    }
}

#[async_trait]
impl<Fd, F, T, U> Feed<U> for Map<Fd, F, T>
where
    Fd: Feed<T> + 'static,
    F: FnMut(T) -> U + Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    async fn next(&mut self) -> FeedResult<U> {
        let value = self.inner.next().await?;
        Ok((self.f)(value))
    }

    fn try_next(&mut self) -> FeedResult<Option<U>> {
        Ok(self.inner.try_next()?.map(&mut self.f))
    }
}

/// Feed returned by [`FeedExt::distinct`]
pub struct Distinct<Fd, T> {
    inner: Fd,
    last: Option<T>,
}

impl<Fd, T> Distinct<Fd, T> {
    pub fn new(inner: Fd) -> Self {
        Self { inner, last: None }
    }

    /// Most recently emitted value
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Record `value` if it differs from the last emission
    fn admit(&mut self, value: T) -> Option<T>
    where
        T: PartialEq + Clone,
    {
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }
}

#[async_trait]
impl<Fd, T> Feed<T> for Distinct<Fd, T>
where
    Fd: Feed<T> + 'static,
    T: PartialEq + Clone + Send + 'static,
{
    async fn next(&mut self) -> FeedResult<T> {
        loop {
            let value = self.inner.next().await?;
            if let Some(value) = self.admit(value) {
                return Ok(value);
            }
        }
    }

    fn try_next(&mut self) -> FeedResult<Option<T>> {
        while let Some(value) = self.inner.try_next()? {
            if let Some(value) = self.admit(value) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// Combinator methods for every [`Feed`]
pub trait FeedExt<T>: Feed<T> + Sized {
    /// Project every value through `f`
    fn map<U, F>(self, f: F) -> Map<Self, F, T>
    where
        F: FnMut(T) -> U,
    {
        Map::new(self, f)
    }

    /// Suppress values equal to the previously emitted one
    fn distinct(self) -> Distinct<Self, T>
    where
        T: PartialEq + Clone,
    {
        Distinct::new(self)
    }
}

impl<T, Fd: Feed<T>> FeedExt<T> for Fd {}
