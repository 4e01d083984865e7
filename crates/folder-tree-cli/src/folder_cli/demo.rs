/// Demonstration sequence run by `folder-tree --demo`.
///
/// The last block issues commands that are expected to fail: duplicate
/// names, and removals or renames of folders that no longer exist.
pub const DEMO_SCRIPT: &str = "\
echo Initial directory tree:
print

# Add F1, F4, F5 by parent name.
add-under root F1
add-under F1 F4
add-under F1 F5
echo Directory tree after adding folders by parent name:
print

# Add F2, F3, F6, F7, F8 by parent path.
add / F2
add / F3
add /F3/ F6
add /F3/F6 F7
add /F3/F6/F7 F8
echo Directory tree after adding folders by parent path:
print

rm-name F8
rm /F2
echo Directory tree after removing F8 and F2:
print

rename F7 F7_updated
mv /F1 F1_updated
echo Directory tree after renaming F7 and F1:
print

echo Folder F3:
get /F3

# Each of these fails and leaves the tree unchanged.
add / F6
add-under F6 F5
rm-name F10
rm /F9
rename F7 F7_old
mv /F1 F1_old
echo Final directory tree:
print
";
