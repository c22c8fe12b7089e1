//! Sorted, read-only view over every loaded lesson

use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;

use super::post::{Post, GRAMMAR, PRACTICE, VOCABULARY};
use crate::helpers::parse_date_string;

/// Ordering of two lessons: both weighted compares weights ascending,
/// anything else compares dates newest first. Unparseable dates compare equal.
pub fn compare_posts(a: &Post, b: &Post) -> Ordering {
    compare_keys(&SortKey::of(a), &SortKey::of(b))
}

struct SortKey {
    weight: Option<f64>,
    date: Option<DateTime<Local>>,
}

impl SortKey {
    fn of(post: &Post) -> Self {
        Self {
            weight: post.weight(),
            date: parse_date_string(&post.date),
        }
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a.weight, b.weight) {
        (Some(wa), Some(wb)) => wa.partial_cmp(&wb).unwrap_or(Ordering::Equal),
        _ => match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da),
            _ => Ordering::Equal,
        },
    }
}

/// Stable sort by [`compare_posts`].
///
/// Mixing weighted and unweighted lessons makes the comparison intransitive,
/// which `slice::sort_by` is allowed to panic on, so the first pass is an
/// insertion sort. No order satisfies every pair in that case; the second
/// pass refills the slots held by weighted lessons in weight order so any
/// two weighted lessons always end up lightest first.
pub fn sort_posts(posts: &mut Vec<Post>) {
    let mut keyed: Vec<(SortKey, Post)> = posts.drain(..).map(|p| (SortKey::of(&p), p)).collect();

    for i in 1..keyed.len() {
        let mut j = i;
        while j > 0 && compare_keys(&keyed[j - 1].0, &keyed[j].0) == Ordering::Greater {
            keyed.swap(j - 1, j);
            j -= 1;
        }
    }

    let slots: Vec<usize> = keyed
        .iter()
        .enumerate()
        .filter(|(_, (key, _))| key.weight.is_some())
        .map(|(i, _)| i)
        .collect();
    let mut by_weight = slots.clone();
    by_weight.sort_by(|&a, &b| {
        let (wa, wb) = (keyed[a].0.weight.unwrap_or_default(), keyed[b].0.weight.unwrap_or_default());
        wa.total_cmp(&wb)
    });

    let mut taken: Vec<Option<(SortKey, Post)>> = keyed.into_iter().map(Some).collect();
    let weighted: Vec<(SortKey, Post)> = by_weight.iter().filter_map(|&i| taken[i].take()).collect();
    for (slot, entry) in slots.into_iter().zip(weighted) {
        taken[slot] = Some(entry);
    }

    posts.extend(taken.into_iter().flatten().map(|(_, p)| p));
}

/// All lessons, sorted once at construction
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    /// Wrap and sort a set of lessons
    pub fn new(mut posts: Vec<Post>) -> Self {
        sort_posts(&mut posts);
        Self { posts }
    }

    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn into_vec(self) -> Vec<Post> {
        self.posts
    }

    /// Lessons whose `type` equals `content_type`; empty when none do
    pub fn by_type(&self, content_type: &str) -> Vec<&Post> {
        self.filter(|p| p.content_type() == Some(content_type))
    }

    /// First lesson with exactly this slug
    pub fn by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn grammar(&self) -> Vec<&Post> {
        self.by_type(GRAMMAR)
    }

    pub fn vocabulary(&self) -> Vec<&Post> {
        self.by_type(VOCABULARY)
    }

    pub fn practice(&self) -> Vec<&Post> {
        self.by_type(PRACTICE)
    }

    /// Distinct `type` values in order of first appearance
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for t in self.posts.iter().filter_map(Post::content_type) {
            if !types.contains(&t) {
                types.push(t);
            }
        }
        types
    }

    /// Lessons without a text `type`
    pub fn untyped(&self) -> Vec<&Post> {
        self.filter(|p| p.content_type().is_none())
    }

    pub fn by_level(&self, level: &str) -> Vec<&Post> {
        self.filter(|p| p.level() == Some(level))
    }

    pub fn tagged(&self, tag: &str) -> Vec<&Post> {
        self.filter(|p| p.tags().contains(&tag))
    }

    /// Previous and next lesson of the same type, in collection order
    pub fn neighbors(&self, slug: &str) -> (Option<&Post>, Option<&Post>) {
        let Some(post) = self.by_slug(slug) else {
            return (None, None);
        };

        let siblings = match post.content_type() {
            Some(t) => self.by_type(t),
            None => self.untyped(),
        };
        let Some(pos) = siblings.iter().position(|p| p.slug == slug) else {
            return (None, None);
        };

        let prev = pos.checked_sub(1).and_then(|i| siblings.get(i)).copied();
        let next = siblings.get(pos + 1).copied();
        (prev, next)
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Post>
    where
        F: Fn(&Post) -> bool,
    {
        self.posts.iter().filter(|p| predicate(p)).collect()
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
