/// One entry of the ssh option grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
	/// The short flag character, without the leading `-`.
	pub flag: char,

	/// Whether the flag consumes a value.
	pub takes_argument: bool,
}

const fn boolean(flag: char) -> FlagSpec {
	FlagSpec {
		flag,
		takes_argument: false,
	}
}

const fn valued(flag: char) -> FlagSpec {
	FlagSpec {
		flag,
		takes_argument: true,
	}
}

/// Every short flag the OpenSSH client documents.
pub const SSH_FLAGS: &[FlagSpec] = &[
	boolean('1'),
	boolean('2'),
	boolean('4'),
	boolean('6'),
	boolean('A'),
	boolean('a'),
	boolean('C'),
	boolean('f'),
	boolean('g'),
	boolean('K'),
	boolean('k'),
	boolean('M'),
	boolean('N'),
	boolean('n'),
	boolean('q'),
	boolean('s'),
	boolean('T'),
	boolean('t'),
	boolean('V'),
	boolean('v'),
	boolean('X'),
	boolean('x'),
	boolean('Y'),
	boolean('y'),
	valued('b'),
	valued('c'),
	valued('D'),
	valued('e'),
	valued('F'),
	valued('I'),
	valued('i'),
	valued('L'),
	valued('l'),
	valued('m'),
	valued('O'),
	valued('o'),
	valued('p'),
	valued('R'),
	valued('S'),
	valued('W'),
	valued('w'),
];

/// Usage synopsis, matching ssh(1).
pub const USAGE: &str = "\
usage: ssh [-1246AaCfgKkMNnqsTtVvXxYy] [-b bind_address] [-c cipher_spec]
           [-D [bind_address:]port] [-e escape_char] [-F configfile]
           [-I pkcs11] [-i identity_file]
           [-L [bind_address:]port:host:hostport]
           [-l login_name] [-m mac_spec] [-O ctl_cmd] [-o option] [-p port]
           [-R [bind_address:]port:host:hostport] [-S ctl_path]
           [-W host:port] [-w local_tun[:remote_tun]]
           [user@]hostname [command]";

/// Look up a flag character in the grammar.
pub fn lookup_flag(flag: char) -> Option<&'static FlagSpec> {
	SSH_FLAGS.iter().find(|spec| spec.flag == flag)
}
