use crate::config::Scoping;
use crate::descriptor::Descriptor;
use std::path::{Path, PathBuf};

/// A descriptor together with the directory it governs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Walk depth of the directory holding the descriptor (0 for the root)
    pub depth: usize,
    /// Directory holding the descriptor, relative to the scan root
    pub dir: PathBuf,
    /// The descriptor itself
    pub descriptor: Descriptor,
}

/// Stack of governing descriptors mirroring the directory stack of a
/// depth-first walk
///
/// The root frame is never popped. With [`Scoping::Lexical`] a nested frame is
/// dropped as soon as the walk yields an entry that is not inside its
/// directory. With [`Scoping::Legacy`] a nested descriptor replaces whatever
/// was current and stays in effect for the rest of the walk.
#[derive(Debug, Clone)]
pub struct DescriptorStack {
    /// Frames from the root outwards; never empty
    frames: Vec<Frame>,
    /// Whether nested frames are popped on the way back out
    scoping: Scoping,
}

impl DescriptorStack {
    /// Create a stack governed by the root descriptor
    #[must_use]
    pub fn new(root: Descriptor, scoping: Scoping) -> Self {
        Self {
            frames: vec![Frame {
                depth: 0,
                dir: PathBuf::new(),
                descriptor: root,
            }],
            scoping,
        }
    }

    /// Drop frames that cannot govern an entry at `depth`
    ///
    /// Call this for every walked entry before looking at it. In a depth-first
    /// walk, an entry at depth `d` is outside every directory at depth `d` or
    /// deeper that was visited before it.
    pub fn leave_to(&mut self, depth: usize) {
        if self.scoping == Scoping::Legacy {
            return;
        }
        while self.frames.len() > 1 && self.frames.last().is_some_and(|f| f.depth >= depth) {
            self.frames.pop();
        }
    }

    /// Install the descriptor found in `dir` (at walk depth `depth`)
    pub fn enter(&mut self, depth: usize, dir: &Path, descriptor: Descriptor) {
        let frame = Frame {
            depth,
            dir: dir.to_path_buf(),
            descriptor,
        };
        match self.scoping {
            Scoping::Lexical => self.frames.push(frame),
            Scoping::Legacy => {
                self.frames.truncate(1);
                self.frames.push(frame);
            }
        }
    }

    /// The governing frame
    #[must_use]
    pub fn current(&self) -> &Frame {
        // `frames` always holds the root frame.
        &self.frames[self.frames.len() - 1]
    }

    /// Number of nested descriptors in effect
    #[must_use]
    pub fn nesting(&self) -> usize {
        self.frames.len() - 1
    }
}
