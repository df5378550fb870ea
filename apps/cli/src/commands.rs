//! `resolve` and `watch`.

use std::io::Write;

use anyhow::Context as _;
use futures::StreamExt;
use serde::Serialize;
use tessera_resolver::prelude::*;

use crate::cli::NodeKind;

/// One printed line.
#[derive(Serialize)]
struct Report<'a, T> {
    node: NodeKind,
    outcome: &'a T,
}

fn emit<W, T>(out: &mut W, node: NodeKind, outcome: &T) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer(&mut *out, &Report { node, outcome })
        .with_context(|| format!("failed to encode outcome of {node}"))?;
    writeln!(out).context("failed to write to stdout")?;
    Ok(())
}

async fn resolve_one<R, W>(node: NodeKind, resolver: &R, out: &mut W) -> anyhow::Result<()>
where
    R: Resolve,
    R::Value: Serialize,
    R::Error: Serialize,
    R::Warning: Serialize,
    W: Write,
{
    let outcome = resolver.resolve().await;
    tracing::info!(%node, %outcome, "resolved");
    emit(out, node, &outcome)
}

async fn watch_one<R, W>(node: NodeKind, resolver: &R, take: usize, out: &mut W) -> anyhow::Result<()>
where
    R: Resolve,
    R::Value: Serialize,
    R::Error: Serialize,
    R::Warning: Serialize,
    W: Write,
{
    let mut live = resolver.resolve_stream().take(take);
    let mut emitted = 0_usize;
    while let Some(outcome) = live.next().await {
        emitted += 1;
        tracing::debug!(%node, emission = emitted, %outcome, "emission");
        emit(out, node, &outcome)?;
    }
    drop(live);
    tracing::info!(%node, emitted, "subscription dropped");
    Ok(())
}

/// Resolve `node` (or every node) once, reaching children through one root.
pub async fn resolve<W: Write>(node: Option<NodeKind>, out: &mut W) -> anyhow::Result<()> {
    let root = PropRoot::<PropA, PropB>::new();
    let selected = node.map_or_else(|| NodeKind::ALL.to_vec(), |node| vec![node]);

    for node in selected {
        match node {
            NodeKind::Root => resolve_one(node, &root, out).await?,
            NodeKind::A => resolve_one(node, root.property_a(), out).await?,
            NodeKind::B => resolve_one(node, root.property_b(), out).await?,
            NodeKind::C => resolve_one(node, root.property_a().property_c(), out).await?,
            NodeKind::D => resolve_one(node, root.property_b().property_d(), out).await?,
        }
    }
    Ok(())
}

/// Print the first `take` emissions of `node`, then unsubscribe.
pub async fn watch<W: Write>(node: NodeKind, take: usize, out: &mut W) -> anyhow::Result<()> {
    let root = PropRoot::<PropA, PropB>::new();

    match node {
        NodeKind::Root => watch_one(node, &root, take, out).await,
        NodeKind::A => watch_one(node, root.property_a(), take, out).await,
        NodeKind::B => watch_one(node, root.property_b(), take, out).await,
        NodeKind::C => watch_one(node, root.property_a().property_c(), take, out).await,
        NodeKind::D => watch_one(node, root.property_b().property_d(), take, out).await,
    }
}
