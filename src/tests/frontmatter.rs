use super::{boundary_line, BlockKind, ContentBlock};

#[test]
fn metadata_block_sets_boundary_after_its_end() {
    let blocks = [
        ContentBlock {
            kind: BlockKind::Metadata,
            start_line: 0,
            end_line: 2,
        },
        ContentBlock {
            kind: BlockKind::Content,
            start_line: 3,
            end_line: 5,
        },
    ];
    assert_eq!(boundary_line(&blocks), 3);
}

#[test]
fn no_metadata_means_top_of_file() {
    let blocks = [ContentBlock {
        kind: BlockKind::Content,
        start_line: 0,
        end_line: 4,
    }];
    assert_eq!(boundary_line(&blocks), 0);
}

#[test]
fn empty_block_list_means_top_of_file() {
    assert_eq!(boundary_line(&[]), 0);
}
