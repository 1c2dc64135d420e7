use super::Artifact;

pub const PATH: &str = "webpack.config.js";

/// Bundles every function entry with `ts-loader` for the Node target.
/// The same for every project.
const CONFIG: &str = r#"const path = require('path');
const slsw = require('serverless-webpack');
const { IgnorePlugin } = require('webpack');

module.exports = {
  mode: 'production',
  entry: slsw.lib.entries,
  resolve: {
    extensions: ['.js', '.json', '.ts', '.tsx'],
  },
  externals: [
    {
      'aws-sdk': 'commonjs aws-sdk',
      '@google-cloud/storage': 'commonjs @google-cloud/storage',
    },
  ],
  output: {
    libraryTarget: 'commonjs',
    path: path.join(__dirname, '.webpack'),
    filename: '[name].js',
  },
  optimization: {
    // Webpack uglify can break mysqljs.
    // https://github.com/mysqljs/mysql/issues/1548
    minimize: false,
  },
  plugins: [
    new IgnorePlugin(/^encoding$/, /node-fetch/)
  ],
  target: 'node',
  module: {
    rules: [
      {
        test: /\.ts(x?)$/,
        use: [
          {
            loader: 'ts-loader',
          },
        ],
      },
    ],
    noParse: /\/node_modules\/encoding\/lib\/iconv-loader\.js$/,
  },
};
"#;

pub fn render() -> Artifact {
    Artifact::new(PATH, CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regexes_keep_single_escapes() {
        let contents = render().contents;
        assert!(contents.contains(r"test: /\.ts(x?)$/,"));
        assert!(contents.contains(r"noParse: /\/node_modules\/encoding\/lib\/iconv-loader\.js$/,"));
        assert!(contents.ends_with("};\n"));
    }
}
